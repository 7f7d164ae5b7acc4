use std::path::Path;

use crate::google_books::Volume;

/// A normalized, not-yet-persisted book derived from one search result.
///
/// `physical`, `file_path` and `format` stay unset until the user has
/// answered the ownership prompts.
#[derive(Debug, Clone)]
pub struct BookCandidate {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub categories: Vec<String>,
    pub language: String,
    pub physical: Option<bool>,
    pub file_path: Option<String>,
    pub format: Option<String>,
}

impl BookCandidate {
    /// Maps one raw volume to a candidate. Items without a title yield
    /// `None` and are silently dropped.
    pub fn from_volume(volume: Volume) -> Option<Self> {
        let info = volume.volume_info;
        let title = info.title.filter(|t| !t.is_empty())?;

        let author = info.authors.unwrap_or_default().join(", ");

        let identifiers = info.industry_identifiers.unwrap_or_default();
        // First ISBN_13 wins; first ISBN_10 is the fallback.
        let isbn = ["ISBN_13", "ISBN_10"]
            .iter()
            .find_map(|kind| {
                identifiers
                    .iter()
                    .find(|id| id.kind == *kind)
                    .map(|id| id.identifier.clone())
            })
            .unwrap_or_default();

        Some(Self {
            title,
            author,
            isbn,
            categories: info.categories.unwrap_or_default(),
            language: info.language.unwrap_or_else(|| "en".to_string()),
            physical: None,
            file_path: None,
            format: None,
        })
    }

    /// One-line label for the selection list.
    pub fn label(&self) -> String {
        let mut label = self.title.clone();
        if !self.author.is_empty() {
            label.push_str(" - ");
            label.push_str(&self.author);
        }
        if !self.isbn.is_empty() {
            label.push_str(&format!(" ({})", self.isbn));
        }
        label
    }

    /// Attaches the file path and derives the format from its
    /// extension, upper-cased. Empty paths are ignored.
    pub fn set_file(&mut self, path: &str) {
        let path = path.trim();
        if path.is_empty() {
            return;
        }
        self.format = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_uppercase());
        self.file_path = Some(path.to_string());
    }
}

/// Order-preserving normalization of a raw result list.
pub fn normalize(volumes: Vec<Volume>) -> Vec<BookCandidate> {
    volumes
        .into_iter()
        .filter_map(BookCandidate::from_volume)
        .collect()
}
