use crate::corpus::WordCorpus;
use crate::error::{Error, Result};
use crate::random::RandomSource;
use std::fmt;
use std::ops::Deref;
use zeroize::Zeroizing;

pub const SYMBOLS: [char; 6] = ['@', '&', '$', '!', '#', '?'];
pub const DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// How a word length is picked for each word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LengthPolicy {
    /// Every distinct length is equally likely, however many words it holds.
    #[default]
    Uniform,
    /// Lengths are picked in proportion to how many words they hold.
    Weighted,
}

/// Capitalized words followed by one symbol and one digit.
pub struct Passphrase {
    value: Zeroizing<String>,
    word_count: usize,
}

impl Passphrase {
    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }
}

impl Deref for Passphrase {
    type Target = str;

    fn deref(&self) -> &str {
        &self.value
    }
}

impl fmt::Debug for Passphrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Passphrase")
            .field("len", &self.value.len())
            .field("word_count", &self.word_count)
            .finish()
    }
}

pub fn generate<R: RandomSource>(
    corpus: &WordCorpus,
    word_count: usize,
    rng: &mut R,
) -> Result<Passphrase> {
    generate_with(corpus, word_count, LengthPolicy::Uniform, rng)
}

pub fn generate_with<R: RandomSource>(
    corpus: &WordCorpus,
    word_count: usize,
    policy: LengthPolicy,
    rng: &mut R,
) -> Result<Passphrase> {
    if word_count == 0 {
        return Err(Error::InvalidArgument(
            "word count must be at least 1".to_string(),
        ));
    }
    if corpus.is_empty() {
        return Err(Error::InvalidArgument("wordlist is empty".to_string()));
    }

    let buckets: Vec<(usize, &[String])> = corpus.buckets().collect();
    let total_words = corpus.word_count();
    let mut value = Zeroizing::new(String::new());

    for _ in 0..word_count {
        let word = match policy {
            LengthPolicy::Uniform => {
                let (_, words) = buckets[rng.index(buckets.len())];
                &words[rng.index(words.len())]
            }
            LengthPolicy::Weighted => {
                let bucket = weighted_bucket(&buckets, rng.index(total_words));
                &bucket[rng.index(bucket.len())]
            }
        };
        push_title_case(&mut value, word);
    }

    value.push(SYMBOLS[rng.index(SYMBOLS.len())]);
    value.push(DIGITS[rng.index(DIGITS.len())]);

    Ok(Passphrase { value, word_count })
}

// Maps an index over all words onto the bucket that holds it.
fn weighted_bucket<'a>(buckets: &[(usize, &'a [String])], mut index: usize) -> &'a [String] {
    for (_, words) in buckets {
        if index < words.len() {
            return words;
        }
        index -= words.len();
    }
    buckets[buckets.len() - 1].1
}

fn push_title_case(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}
