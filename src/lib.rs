pub mod clipboard;
pub mod config;
pub mod corpus;
pub mod error;
pub mod generator;
pub mod random;
pub mod wordlist;

pub use clipboard::copy_to_clipboard;
pub use config::{Bootstrap, Config, WORDLIST_FILE};
pub use corpus::WordCorpus;
pub use error::{Error, Result};
pub use generator::{generate, generate_with, LengthPolicy, Passphrase};
pub use random::{Keystream, RandomSource};
pub use wordlist::{default_wordlist, process, process_file, ProcessStats};
