//! Form variant and request models.

use serde::{Deserialize, Serialize};

use crate::framework::Framework;
use crate::prompt::PromptTemplate;

/// A validated submission. Lives for one request/response cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub framework: Framework,
    pub topic: String,
}

/// Configuration of one form page.
#[derive(Debug, Clone)]
pub struct FormVariant {
    pub slug: String,
    pub title: String,
    pub framework_label: String,
    pub topic_label: String,
    pub placeholder: String,
    pub max_chars: usize,
    pub template: PromptTemplate,
    pub frameworks: Vec<Framework>,
    pub download_filename: String,
}

/// Public description of a variant, used by the JSON API and CLI listing.
#[derive(Debug, Clone, Serialize)]
pub struct VariantSummary {
    pub slug: String,
    pub title: String,
    pub max_chars: usize,
    pub frameworks: Vec<String>,
    pub download_filename: String,
}

impl FormVariant {
    pub fn summary(&self) -> VariantSummary {
        VariantSummary {
            slug: self.slug.clone(),
            title: self.title.clone(),
            max_chars: self.max_chars,
            frameworks: self
                .frameworks
                .iter()
                .map(|f| f.display_name().to_string())
                .collect(),
            download_filename: self.download_filename.clone(),
        }
    }

    /// Whether this variant offers `framework` in its selector.
    pub fn offers(&self, framework: Framework) -> bool {
        self.frameworks.contains(&framework)
    }
}
