//! Typed result of one submission and the download built from it.

use serde::Serialize;

use crate::error::ValidationError;
use crate::form::model::FormVariant;

/// MIME type of every download.
pub const DOWNLOAD_MIME: &str = "text/plain";

/// What happened to a submission.
///
/// `Invalid` never reached the network. `Failed` is a request error from the
/// completion service; no partial output is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success { text: String },
    Invalid(ValidationError),
    Failed(String),
}

impl Outcome {
    /// Generated text, if the call succeeded.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Success { text } => Some(text),
            _ => None,
        }
    }

    /// Download offer for a successful outcome.
    pub fn download(&self, variant: &FormVariant) -> Option<Download> {
        self.text().map(|text| Download::new(variant, text))
    }
}

/// A file offered for download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Download {
    pub filename: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl Download {
    /// Build the download for `text`. Bytes are the text's UTF-8 encoding, unchanged.
    pub fn new(variant: &FormVariant, text: &str) -> Self {
        Self {
            filename: variant.download_filename.clone(),
            mime: DOWNLOAD_MIME,
            bytes: text.as_bytes().to_vec(),
        }
    }

    /// `Content-Disposition` header value.
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_bytes_match_text() {
        let variant = FormVariant::characters().unwrap();
        let text = "# Harry\n\n- INFP\r\n- ünïcödé\n";
        let outcome = Outcome::Success { text: text.to_string() };

        let download = outcome.download(&variant).unwrap();
        assert_eq!(download.bytes, text.as_bytes());
        assert_eq!(download.filename, "personality_characters.txt");
        assert_eq!(download.mime, "text/plain");
    }

    #[test]
    fn test_filename_independent_of_text() {
        let variant = FormVariant::insights().unwrap();
        let a = Download::new(&variant, "one");
        let b = Download::new(&variant, "two");
        assert_eq!(a.filename, b.filename);
        assert_eq!(
            a.content_disposition(),
            "attachment; filename=\"personality_insights.txt\""
        );
    }

    #[test]
    fn test_no_download_without_success() {
        let variant = FormVariant::insights().unwrap();
        assert!(Outcome::Invalid(ValidationError::EmptyTopic).download(&variant).is_none());
        assert!(Outcome::Failed("timeout".into()).download(&variant).is_none());
    }
}
