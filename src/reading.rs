//! Bibliographic data for lecture readings.

use serde::{Deserialize, Serialize};

/// A reading associated with a lecture.
///
/// Used for the framing reading of a standard reading assignment, the
/// instance readings offered alongside it, and additional resource readings.
/// Immutable reference data with no lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    pub author_text: String,
    pub title: String,
    pub publication_text: String,
    pub link: Option<String>,
}

impl Reading {
    pub fn new(author_text: &str, title: &str, publication_text: &str) -> Self {
        Reading {
            author_text: author_text.to_string(),
            title: title.to_string(),
            publication_text: publication_text.to_string(),
            link: None,
        }
    }

    pub fn with_link(mut self, link: &str) -> Self {
        self.link = Some(link.to_string());
        self
    }
}
