mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use genpass::wordlist::DEFAULT_OUTPUT;
use genpass::{Bootstrap, Config, Keystream, LengthPolicy, WordCorpus};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "genpass",
    version,
    about = "Memorable passphrase generator built from a length-indexed wordlist"
)]
struct Cli {
    /// Path to the wordlist file
    #[arg(short, long)]
    wordlist: Option<PathBuf>,

    /// Number of words in the passphrase
    #[arg(short, long, default_value_t = 4)]
    num: usize,

    /// Process a raw wordlist (one word per line) for use with genpass
    #[arg(short, long, requires = "wordlist")]
    process: bool,

    /// Where to write the processed wordlist
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Copy the new passphrase to the clipboard
    #[arg(short, long)]
    copy: bool,

    /// Derive randomness from a phrase for reproducible output
    #[arg(long)]
    seed: Option<String>,

    /// Pick word lengths in proportion to how many words they hold
    #[arg(long)]
    weighted: bool,

    /// Only print the result
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let options = ui::DisplayOptions::detect(cli.quiet);

    ui::print_logo(&options);

    if let (true, Some(input)) = (cli.process, cli.wordlist.as_deref()) {
        let (stats, elapsed) = ui::show_progress(&options, "Processing wordlist...", || {
            genpass::process_file(input, &cli.output).with_context(|| {
                format!("Failed to process wordlist {}", input.display())
            })
        })?;

        ui::display_processed(&options, &stats, &cli.output, elapsed);
        return Ok(());
    }

    let config = Config::resolve().context("Failed to resolve config directory")?;

    // A user-supplied list is only copied into the config once it has loaded.
    let (wordlist, corpus, outcome) = match &cli.wordlist {
        Some(path) => {
            let corpus = load_wordlist(path)?;
            let outcome = bootstrap(&config, Some(path.as_path()))?;
            (path.clone(), corpus, outcome)
        }
        None => {
            ui::notice(&options, "Using default wordlist");
            let outcome = bootstrap(&config, None)?;
            let path = config.wordlist_path();
            (path.clone(), load_wordlist(&path)?, outcome)
        }
    };
    ui::bootstrap_notice(&options, outcome, config.dir());

    let mut rng = match &cli.seed {
        Some(phrase) => Keystream::from_phrase(phrase),
        None => Keystream::from_entropy()?,
    };

    let policy = if cli.weighted {
        LengthPolicy::Weighted
    } else {
        LengthPolicy::Uniform
    };

    let passphrase = genpass::generate_with(&corpus, cli.num, policy, &mut rng)?;

    ui::display_output(&passphrase, &corpus, &wordlist, policy, &options);

    if cli.copy {
        if let Err(e) = genpass::copy_to_clipboard(&passphrase) {
            ui::warn(&options, "Could not copy the password to the clipboard.");
            return Err(e.into());
        }
        ui::notice(&options, "Your new password has been copied to the clipboard.");
    }

    Ok(())
}

fn load_wordlist(path: &Path) -> Result<WordCorpus> {
    WordCorpus::load(path).with_context(|| format!("Failed to load wordlist {}", path.display()))
}

fn bootstrap(config: &Config, seed: Option<&Path>) -> Result<Bootstrap> {
    config
        .bootstrap(seed)
        .context("Failed to set up config directory")
}
