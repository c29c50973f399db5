use crate::error::{Error, Result};
use crate::wordlist::default_wordlist;
use directories::BaseDirs;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const CONFIG_DIR_ENV: &str = "GENPASS_CONFIG_DIR";
pub const WORDLIST_FILE: &str = "genpass.lst";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bootstrap {
    /// Directory and wordlist were already in place.
    Ready,
    /// The config directory was missing and has been created with a wordlist.
    CreatedDir,
    /// The directory existed but the wordlist had to be written.
    CreatedWordlist,
}

#[derive(Debug, Clone)]
pub struct Config {
    dir: PathBuf,
}

impl Config {
    /// `$GENPASS_CONFIG_DIR`, falling back to `<config dir>/genpass`.
    pub fn resolve() -> Result<Self> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(Self::at(dir));
        }

        let base = BaseDirs::new().map(|dirs| dirs.config_dir().to_path_buf());
        Self::under(base.as_deref())
    }

    fn under(base: Option<&Path>) -> Result<Self> {
        let base = base.ok_or_else(|| {
            Error::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "could not determine the home directory",
            ))
        })?;
        Ok(Self::at(base.join("genpass")))
    }

    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn wordlist_path(&self) -> PathBuf {
        self.dir.join(WORDLIST_FILE)
    }

    /// Makes sure the config directory and its wordlist exist.
    ///
    /// A missing wordlist is filled from `seed` when given, otherwise from
    /// the bundled default list. An existing wordlist is never touched.
    pub fn bootstrap(&self, seed: Option<&Path>) -> Result<Bootstrap> {
        let wordlist = self.wordlist_path();

        if let Some(src) = seed {
            fs::metadata(src).map_err(|e| Error::file(src, e))?;
        }

        let created_dir = if self.dir.is_dir() {
            false
        } else {
            fs::create_dir_all(&self.dir).map_err(|e| Error::file(&self.dir, e))?;
            true
        };

        if !created_dir && wordlist.is_file() {
            return Ok(Bootstrap::Ready);
        }

        match seed {
            Some(src) => {
                fs::copy(src, &wordlist).map_err(|e| Error::file(src, e))?;
            }
            None => {
                fs::write(&wordlist, default_wordlist()).map_err(|e| Error::file(&wordlist, e))?;
            }
        }

        Ok(if created_dir {
            Bootstrap::CreatedDir
        } else {
            Bootstrap::CreatedWordlist
        })
    }
}
