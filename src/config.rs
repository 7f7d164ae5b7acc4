use std::env;
use std::path::PathBuf;

use crate::google_books::DEFAULT_API_URL;

#[derive(Clone)]
pub struct Config {
    /// Path of the flat library file entries are appended to.
    pub library_file: PathBuf,
    /// Physical flag used by quick add, which never prompts.
    pub default_physical: bool,
    /// Volumes endpoint; overridable so tests can point at a local server.
    pub api_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            library_file: lookup("BOOKCAP_LIBRARY")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("books.org")),
            default_physical: lookup("BOOKCAP_DEFAULT_PHYSICAL")
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            api_url: lookup("BOOKCAP_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        }
    }
}
