//! Capture orchestrator: query -> search -> selection -> duplicate
//! gate -> ownership metadata -> format -> append.

use crate::candidate::{self, BookCandidate};
use crate::config::Config;
use crate::entry;
use crate::errors::CaptureError;
use crate::google_books::SearchClient;
use crate::library::Library;

/// How a capture session ended. Only `Added` changes the library file.
#[derive(Debug, PartialEq, Eq)]
pub enum CaptureOutcome {
    Added { title: String },
    NoResults,
    Duplicate { title: String },
    Aborted,
}

/// The interactive boundary. The orchestrator only needs three
/// answers out of it: one index among N labeled choices, one yes/no,
/// and one optional line of text.
pub trait Interaction {
    /// Returns the zero-based index of the chosen item, or `None` when
    /// the user declines.
    fn select(&mut self, items: &[String]) -> Option<usize>;
    fn confirm(&mut self, question: &str) -> bool;
    /// Returns the entered line; empty means "nothing supplied".
    fn prompt_line(&mut self, question: &str) -> String;
}

/// Result of the shared front half of the pipeline: either a candidate
/// to carry forward, or the outcome the session already ended with.
enum Selected {
    Candidate(BookCandidate),
    Ended(CaptureOutcome),
}

/// One capture session. Owns the candidate list produced by the most
/// recent search; the list never outlives the session.
pub struct Session<'a, I: Interaction> {
    config: &'a Config,
    client: SearchClient,
    library: Library,
    ui: &'a mut I,
    candidates: Vec<BookCandidate>,
}

impl<'a, I: Interaction> Session<'a, I> {
    pub fn new(config: &'a Config, ui: &'a mut I) -> Self {
        Self {
            client: SearchClient::new(config.api_url.clone()),
            library: Library::new(&config.library_file),
            config,
            ui,
            candidates: Vec::new(),
        }
    }

    /// Full interactive capture.
    pub fn capture(&mut self, query: &str) -> Result<CaptureOutcome, CaptureError> {
        let mut candidate = match self.search_and_select(query)? {
            Selected::Candidate(candidate) => candidate,
            Selected::Ended(outcome) => return Ok(outcome),
        };

        let physical = self.ui.confirm("Is this a physical copy?");
        candidate.physical = Some(physical);
        if !physical {
            let path = self.ui.prompt_line("File path (leave empty to skip):");
            candidate.set_file(&path);
        }

        self.append(candidate)
    }

    /// "Quick add": same pipeline, but the physical flag comes from
    /// configuration and no file path is collected.
    pub fn quick_capture(&mut self, query: &str) -> Result<CaptureOutcome, CaptureError> {
        let mut candidate = match self.search_and_select(query)? {
            Selected::Candidate(candidate) => candidate,
            Selected::Ended(outcome) => return Ok(outcome),
        };

        candidate.physical = Some(self.config.default_physical);
        self.append(candidate)
    }

    /// Validates the query, searches, presents the candidates and
    /// gates on duplicates. Empty queries are rejected before any
    /// network call is made.
    fn search_and_select(&mut self, query: &str) -> Result<Selected, CaptureError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(CaptureError::EmptyQuery);
        }

        tracing::info!("searching for {:?}", query);
        self.candidates = candidate::normalize(self.client.search(query));
        if self.candidates.is_empty() {
            tracing::info!("no results for {:?}", query);
            return Ok(Selected::Ended(CaptureOutcome::NoResults));
        }

        let labels: Vec<String> = self.candidates.iter().map(|c| c.label()).collect();
        let candidate = match self.ui.select(&labels) {
            Some(index) => match self.candidates.get(index) {
                Some(candidate) => candidate.clone(),
                None => return Ok(Selected::Ended(CaptureOutcome::Aborted)),
            },
            None => return Ok(Selected::Ended(CaptureOutcome::Aborted)),
        };

        if self.library.contains_title(&candidate.title) {
            tracing::info!("{:?} already in library, skipping", candidate.title);
            return Ok(Selected::Ended(CaptureOutcome::Duplicate {
                title: candidate.title,
            }));
        }

        Ok(Selected::Candidate(candidate))
    }

    fn append(&mut self, candidate: BookCandidate) -> Result<CaptureOutcome, CaptureError> {
        let title = candidate.title.clone();
        let block = entry::format_entry(&candidate);
        self.library.append(&block)?;
        tracing::info!("appended {:?} to {:?}", title, self.library.path());
        Ok(CaptureOutcome::Added { title })
    }
}
