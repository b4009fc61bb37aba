// Suggestion drafting. Validation and reference codes only; where the
// suggestion gets posted (and any voting on it) is somebody else's problem.

use chrono::{DateTime, Utc};
use rand::Rng;
use thiserror::Error;

pub const MAX_SUGGESTION_LENGTH: usize = 1000;

#[derive(Debug, Clone)]
pub struct Suggestion {
    pub reference: String,
    pub author_id: u64,
    pub author_name: String,
    pub content: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SuggestionError {
    #[error("Suggestions can't be empty.")]
    Empty,

    #[error("Suggestions are limited to {max} characters (yours has {actual}).")]
    TooLong { max: usize, actual: usize },
}

pub struct SuggestionService {
    max_length: usize,
}

impl SuggestionService {
    pub fn new() -> Self {
        Self {
            max_length: MAX_SUGGESTION_LENGTH,
        }
    }

    pub fn draft(
        &self,
        author_id: u64,
        author_name: &str,
        content: &str,
    ) -> Result<Suggestion, SuggestionError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(SuggestionError::Empty);
        }

        let actual = content.chars().count();
        if actual > self.max_length {
            return Err(SuggestionError::TooLong {
                max: self.max_length,
                actual,
            });
        }

        Ok(Suggestion {
            reference: new_reference(),
            author_id,
            author_name: author_name.to_string(),
            content: content.to_string(),
            submitted_at: Utc::now(),
        })
    }
}

impl Default for SuggestionService {
    fn default() -> Self {
        Self::new()
    }
}

/// Six uppercase hex digits, short enough to quote in chat.
fn new_reference() -> String {
    let value: u32 = rand::thread_rng().gen_range(0..0x100_0000);
    format!("{:06X}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_trims_content() {
        let service = SuggestionService::new();
        let suggestion = service.draft(1, "alice", "  add a music channel  ").unwrap();
        assert_eq!(suggestion.content, "add a music channel");
        assert_eq!(suggestion.author_name, "alice");
        assert_eq!(suggestion.reference.len(), 6);
        assert!(suggestion.reference.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_draft_rejects_empty() {
        let service = SuggestionService::new();
        assert_eq!(service.draft(1, "alice", "   ").unwrap_err(), SuggestionError::Empty);
    }

    #[test]
    fn test_draft_rejects_too_long() {
        let service = SuggestionService::new();
        let long = "a".repeat(MAX_SUGGESTION_LENGTH + 1);
        assert_eq!(
            service.draft(1, "alice", &long).unwrap_err(),
            SuggestionError::TooLong {
                max: MAX_SUGGESTION_LENGTH,
                actual: MAX_SUGGESTION_LENGTH + 1
            }
        );
    }
}
