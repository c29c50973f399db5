use anyhow::Result;
use console::{Style, Term};
use genpass::{Bootstrap, LengthPolicy, Passphrase, ProcessStats, WordCorpus};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::{Duration, Instant};

const LOGO: &str = r"
  ▄▖
  ▌ █▌▛▌▛▌▀▌▛▘▛▘
  ▙▌▙▖▌▌▙▌█▌▄▌▄▌
        ▌
";

const ASCII_LOGO: &str = "
  genpass
";

pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
    pub quiet: bool,
}

impl DisplayOptions {
    pub fn detect(quiet: bool) -> Self {
        Self {
            unicode_support: detect_unicode_support(),
            color_support: detect_color_support(),
            quiet,
        }
    }

    fn style(&self, style: Style) -> Style {
        if self.color_support { style } else { Style::new() }
    }
}

pub fn detect_unicode_support() -> bool {
    supports_unicode::on(supports_unicode::Stream::Stdout)
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

pub fn get_status_symbols(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("✓", "!")
    } else {
        ("+", "!")
    }
}

fn pluralize(count: usize, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 { singular } else { plural }
}

pub fn print_logo(options: &DisplayOptions) {
    if options.quiet {
        return;
    }
    let logo = if options.unicode_support { LOGO } else { ASCII_LOGO };
    println!("{}", options.style(Style::new().bold().green()).apply_to(logo));
}

/// Prints an `[i]` status line.
pub fn notice(options: &DisplayOptions, message: &str) {
    if options.quiet {
        return;
    }
    println!(
        "{} {}",
        options.style(Style::new().yellow()).apply_to("[i]"),
        message
    );
}

pub fn warn(options: &DisplayOptions, message: &str) {
    let term = Term::stderr();
    let (_, check_warn) = get_status_symbols(options.unicode_support);
    let line = format!(
        "{} {}",
        options.style(Style::new().red()).apply_to(format!("[{}]", check_warn)),
        message
    );
    term.write_line(&line).ok();
}

pub fn bootstrap_notice(options: &DisplayOptions, outcome: Bootstrap, config_dir: &Path) {
    for message in bootstrap_messages(options, outcome, config_dir) {
        notice(options, &message);
    }
}

fn bootstrap_messages(options: &DisplayOptions, outcome: Bootstrap, config_dir: &Path) -> Vec<String> {
    let path_style = options.style(Style::new().cyan());
    let dir_created = format!(
        "Config directory not present. Created it here: {}",
        path_style.apply_to(config_dir.display())
    );
    let wordlist_created = format!(
        "Wordlist config not present. Created it here: {}",
        path_style.apply_to(config_dir.join(genpass::WORDLIST_FILE).display())
    );

    match outcome {
        Bootstrap::Ready => vec!["Looks like your config is good to go.".to_string()],
        Bootstrap::CreatedDir => vec![dir_created, wordlist_created],
        Bootstrap::CreatedWordlist => vec![wordlist_created],
    }
}

pub fn show_progress<F, T>(options: &DisplayOptions, message: &str, f: F) -> Result<(T, Duration)>
where
    F: FnOnce() -> Result<T>,
{
    let pb = if options.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };

    let style = ProgressStyle::default_spinner()
        .template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    let style = if options.unicode_support {
        style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"])
    } else {
        style.tick_chars("-\\|/-")
    };
    pb.set_style(style);

    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));

    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();

    pb.finish_and_clear();

    result.map(|r| (r, elapsed))
}

pub fn display_processed(
    options: &DisplayOptions,
    stats: &ProcessStats,
    output: &Path,
    elapsed: Duration,
) {
    if options.quiet {
        println!("{}", output.display());
        return;
    }

    let (check_ok, _) = get_status_symbols(options.unicode_support);
    let ok_style = options.style(Style::new().green());

    println!(
        "{} Processed wordlist written to {}",
        ok_style.apply_to(format!("[{}]", check_ok)),
        options.style(Style::new().cyan()).apply_to(output.display())
    );
    println!(
        "  ├─ Written    {} {}",
        stats.written,
        pluralize(stats.written, "word", "words")
    );
    println!(
        "  ├─ Skipped    {} blank {}",
        stats.skipped,
        pluralize(stats.skipped, "line", "lines")
    );
    println!("  └─ Time       {:.1}s", elapsed.as_secs_f64());
}

pub fn display_output(
    passphrase: &Passphrase,
    corpus: &WordCorpus,
    wordlist: &Path,
    policy: LengthPolicy,
    options: &DisplayOptions,
) {
    if options.quiet {
        println!("{}", passphrase.as_str());
        return;
    }

    let pass_style = options.style(Style::new().bold().magenta());
    println!("Your new password: {}\n", pass_style.apply_to(passphrase.as_str()));

    display_settings(passphrase, corpus, wordlist, policy);
}

fn display_settings(
    passphrase: &Passphrase,
    corpus: &WordCorpus,
    wordlist: &Path,
    policy: LengthPolicy,
) {
    let word_count = passphrase.word_count();
    let lengths = corpus.lengths();

    println!("Settings:");
    println!("  ├─ Wordlist   {}", wordlist.display());
    println!(
        "  ├─ Corpus     {} {} in {} {} ({}..={})",
        corpus.word_count(),
        pluralize(corpus.word_count(), "word", "words"),
        corpus.len(),
        pluralize(corpus.len(), "length", "lengths"),
        lengths.first().copied().unwrap_or_default(),
        lengths.last().copied().unwrap_or_default()
    );
    println!(
        "  ├─ Sampling   {}",
        match policy {
            LengthPolicy::Uniform => "Uniform over lengths",
            LengthPolicy::Weighted => "Weighted by bucket size",
        }
    );
    println!(
        "  └─ Output     {} {} + symbol + digit ({} chars)",
        word_count,
        pluralize(word_count, "word", "words"),
        passphrase.chars().count()
    );
}
