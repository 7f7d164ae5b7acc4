use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// The flat text file acting as the entire persisted store. This
/// module only ever appends to it.
pub struct Library {
    path: PathBuf,
}

impl Library {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True when any heading in the file carries the given title,
    /// compared case-insensitively over the full title with the
    /// trailing tag group excluded. A missing file reads as "no
    /// duplicates".
    pub fn contains_title(&self, title: &str) -> bool {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return false,
            Err(e) => {
                tracing::warn!("failed to read library file {:?}: {}", self.path, e);
                return false;
            }
        };

        // Unicode-aware folding: the library holds non-English titles.
        let title = title.to_lowercase();
        contents
            .lines()
            .filter_map(heading_title)
            .any(|heading| heading.to_lowercase() == title)
    }

    /// Appends one pre-formatted entry block, creating the file when
    /// it does not exist yet. Single attempt, no partial-write
    /// recovery.
    pub fn append(&self, block: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(block.as_bytes())?;
        file.flush()
    }
}

/// Extracts the title from a heading line: a leading run of `*`,
/// whitespace, then the title, optionally followed by a contiguous
/// trailing `:tag:tag:` group. Returns `None` for non-heading lines.
///
/// Headings whose tag group was hand-edited into something else (for
/// example with spaces between tags) compare with that text included
/// and may be missed; that matches the historical behavior of the
/// file format.
fn heading_title(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('*')?;
    let rest = rest.trim_start_matches('*');
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let mut title = rest.trim();
    if title.is_empty() {
        return None;
    }

    // Strip a trailing `:a:b:` tag group, if any.
    if title.ends_with(':') {
        if let Some(pos) = title.rfind(char::is_whitespace) {
            let (head, tags) = title.split_at(pos);
            let tags = tags.trim_start();
            if is_tag_group(tags) {
                title = head.trim_end();
            }
        }
    }

    (!title.is_empty()).then_some(title)
}

fn is_tag_group(text: &str) -> bool {
    text.len() > 2
        && text.starts_with(':')
        && text.ends_with(':')
        && !text[1..text.len() - 1].contains(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn extracts_plain_heading_title() {
        assert_eq!(heading_title("* Crime and Punishment"), Some("Crime and Punishment"));
        assert_eq!(heading_title("** Notes on Gogol"), Some("Notes on Gogol"));
    }

    #[test]
    fn strips_trailing_tag_group() {
        assert_eq!(
            heading_title("* Crime and Punishment :physical:fiction:"),
            Some("Crime and Punishment")
        );
        assert_eq!(heading_title("* War and Peace :physical:"), Some("War and Peace"));
    }

    #[test]
    fn ignores_non_heading_lines() {
        assert_eq!(heading_title(":AUTHOR: Fyodor Dostoevsky"), None);
        assert_eq!(heading_title("plain prose line"), None);
        assert_eq!(heading_title("*emphasis, not a heading*"), None);
        assert_eq!(heading_title("* "), None);
    }

    #[test]
    fn colon_words_in_titles_survive() {
        // A trailing colon-term that is not a tag group stays part of
        // the title.
        assert_eq!(
            heading_title("* Dune: Messiah"),
            Some("Dune: Messiah")
        );
    }

    #[test]
    fn duplicate_check_is_case_insensitive() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "* Crime and Punishment :physical:").unwrap();
        writeln!(file, ":PROPERTIES:").unwrap();
        writeln!(file, ":END:").unwrap();

        let library = Library::new(file.path());
        assert!(library.contains_title("crime and punishment"));
        assert!(library.contains_title("CRIME AND PUNISHMENT"));
        assert!(!library.contains_title("Crime"));
        assert!(!library.contains_title("The Gambler"));
    }

    #[test]
    fn duplicate_check_folds_non_ascii_case() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "* Преступление и наказание :physical:").unwrap();
        writeln!(file, "* Éducation sentimentale").unwrap();

        let library = Library::new(file.path());
        assert!(library.contains_title("преступление и наказание"));
        assert!(library.contains_title("ПРЕСТУПЛЕНИЕ И НАКАЗАНИЕ"));
        assert!(library.contains_title("éducation sentimentale"));
        assert!(!library.contains_title("наказание"));
    }

    #[test]
    fn missing_file_has_no_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let library = Library::new(dir.path().join("books.org"));
        assert!(!library.contains_title("Anything"));
    }

    #[test]
    fn append_creates_and_grows_file() {
        let dir = tempfile::tempdir().unwrap();
        let library = Library::new(dir.path().join("books.org"));

        library.append("* First\n\n").unwrap();
        library.append("* Second\n\n").unwrap();

        let contents = std::fs::read_to_string(library.path()).unwrap();
        assert_eq!(contents, "* First\n\n* Second\n\n");
    }
}
