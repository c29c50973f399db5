//! Bundled default wordlist and the raw-wordlist processor.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use unicode_normalization::UnicodeNormalization;

const DEFAULT_WORDLIST: &str = include_str!("../assets/genpass.lst");

#[cfg(test)]
const EXPECTED_SHA256: &str = "da2621ac6b0bfec07087da58ceac21c6161e07262eff2c815a2fb3d00c10af56";

pub const DEFAULT_OUTPUT: &str = "updated_wordfile.txt";

/// The bundled wordlist, already in `"<length> <word>"` form.
pub fn default_wordlist() -> &'static str {
    DEFAULT_WORDLIST
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessStats {
    pub written: usize,
    pub skipped: usize,
}

/// Rewrites one raw word per line as `"<char count> <lowercased word>"`.
///
/// Words are NFC-normalized and lowercased before counting, so every key
/// written equals the character count of the word beside it. Blank lines
/// are skipped. A line holding more than one word cannot be represented and
/// fails the whole run.
pub fn process<R: BufRead, W: Write>(reader: R, mut writer: W) -> Result<ProcessStats> {
    let mut stats = ProcessStats::default();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let word = line.trim();

        if word.is_empty() {
            stats.skipped += 1;
            continue;
        }
        if word.contains(char::is_whitespace) {
            return Err(Error::Format {
                line: i + 1,
                content: line.clone(),
                reason: "expected a single word",
            });
        }

        let word: String = word.nfc().collect::<String>().to_lowercase();
        writeln!(writer, "{} {}", word.chars().count(), word)?;
        stats.written += 1;
    }

    writer.flush()?;
    Ok(stats)
}

/// Processes `input` into `output`.
///
/// Output is staged in a temporary file beside `output` and only moved into
/// place once every line has been processed, so a failed run leaves any
/// existing `output` untouched and `input` may be the same file as `output`.
pub fn process_file(input: &Path, output: &Path) -> Result<ProcessStats> {
    let reader = File::open(input).map_err(|e| Error::file(input, e))?;

    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir).map_err(|e| Error::file(dir, e))?;

    let stats = process(BufReader::new(reader), BufWriter::new(&mut staged))?;

    staged
        .persist(output)
        .map_err(|e| Error::file(output, e.error))?;
    Ok(stats)
}
