//! Form controller: variant registry and submission validation.

pub mod model;

use tracing::debug;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::framework::{is_no_selection, Framework};
use crate::prompt::{PromptTemplate, CHARACTERS_TEMPLATE, INSIGHTS_TEMPLATE};
use model::{FormVariant, Request};

/// Slug of the character-typing form.
pub const CHARACTERS: &str = "characters";

/// Slug of the per-type insights form.
pub const INSIGHTS: &str = "insights";

impl FormVariant {
    /// "Get character personalities from any movie/TV show".
    pub fn characters() -> CoreResult<Self> {
        Ok(Self {
            slug: CHARACTERS.to_string(),
            title: "Get character personalities from any movie/TV show".to_string(),
            framework_label: "Choose a Personality Model".to_string(),
            topic_label: "Enter TV show/movie here, with any additional context".to_string(),
            placeholder: "Gilmore Girls, top 10 characters | all major Harry Potter characters | protagonists from major Disney movies | etc.".to_string(),
            max_chars: 400,
            template: PromptTemplate::new(CHARACTERS, CHARACTERS_TEMPLATE)?,
            frameworks: Framework::ALL.to_vec(),
            download_filename: "personality_characters.txt".to_string(),
        })
    }

    /// "How does each type do X".
    pub fn insights() -> CoreResult<Self> {
        Ok(Self {
            slug: INSIGHTS.to_string(),
            title: "Get insights on how each personality type does anything".to_string(),
            framework_label: "Choose a Personality Model".to_string(),
            topic_label: "Enter a topic or situation".to_string(),
            placeholder: "handles conflict at work | falls in love | spends a free weekend | etc.".to_string(),
            max_chars: 200,
            template: PromptTemplate::new(INSIGHTS, INSIGHTS_TEMPLATE)?,
            frameworks: Framework::ALL.to_vec(),
            download_filename: "personality_insights.txt".to_string(),
        })
    }

    /// Check raw form input and build a [`Request`].
    ///
    /// Checks run in order: selection, offered framework, empty topic,
    /// topic length. The topic is kept as entered, untrimmed.
    pub fn validate(&self, selection: Option<&str>, topic: &str) -> Result<Request, ValidationError> {
        if is_no_selection(selection) {
            return Err(ValidationError::NoFramework);
        }
        let raw = selection.unwrap_or_default();
        let framework = Framework::from_str(raw)
            .filter(|f| self.offers(*f))
            .ok_or_else(|| ValidationError::UnknownFramework(raw.trim().to_string()))?;

        if topic.trim().is_empty() {
            return Err(ValidationError::EmptyTopic);
        }

        let actual = topic_len(topic);
        if actual > self.max_chars {
            return Err(ValidationError::TopicTooLong {
                max: self.max_chars,
                actual,
            });
        }

        debug!(variant = %self.slug, framework = %framework, "Submission validated");
        Ok(Request {
            framework,
            topic: topic.to_string(),
        })
    }
}

/// Length of a topic as the page's `maxlength` counts it.
///
/// Browsers submit a textarea line break as CRLF but count it once.
pub fn topic_len(topic: &str) -> usize {
    topic.chars().count() - topic.matches("\r\n").count()
}

/// The set of form variants served by one process.
#[derive(Debug, Clone)]
pub struct Registry {
    variants: Vec<FormVariant>,
}

impl Registry {
    /// Registry with the built-in characters and insights forms.
    pub fn builtin() -> CoreResult<Self> {
        Ok(Self {
            variants: vec![FormVariant::characters()?, FormVariant::insights()?],
        })
    }

    pub fn get(&self, slug: &str) -> Option<&FormVariant> {
        self.variants.iter().find(|v| v.slug == slug)
    }

    /// Like [`Registry::get`], but an unknown slug is an error.
    pub fn require(&self, slug: &str) -> CoreResult<&FormVariant> {
        self.get(slug)
            .ok_or_else(|| CoreError::VariantNotFound(slug.to_string()))
    }

    pub fn variants(&self) -> &[FormVariant] {
        &self.variants
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::NO_SELECTION;

    #[test]
    fn test_sentinel_selection_rejected() {
        let form = FormVariant::characters().unwrap();
        assert_eq!(
            form.validate(Some(NO_SELECTION), "anything"),
            Err(ValidationError::NoFramework)
        );
        assert_eq!(form.validate(None, "anything"), Err(ValidationError::NoFramework));
    }

    #[test]
    fn test_selection_checked_before_topic() {
        let form = FormVariant::characters().unwrap();
        assert_eq!(form.validate(Some(NO_SELECTION), "   "), Err(ValidationError::NoFramework));
    }

    #[test]
    fn test_blank_topic_rejected() {
        let form = FormVariant::insights().unwrap();
        for topic in ["", "   ", "\n\t "] {
            assert_eq!(
                form.validate(Some("DISC"), topic),
                Err(ValidationError::EmptyTopic)
            );
        }
    }

    #[test]
    fn test_unknown_framework_rejected() {
        let form = FormVariant::insights().unwrap();
        assert_eq!(
            form.validate(Some("Astrology"), "dating"),
            Err(ValidationError::UnknownFramework("Astrology".to_string()))
        );
    }

    #[test]
    fn test_framework_not_offered_by_variant() {
        let mut form = FormVariant::insights().unwrap();
        form.frameworks = vec![Framework::Disc];
        assert!(matches!(
            form.validate(Some("Enneagram"), "dating"),
            Err(ValidationError::UnknownFramework(_))
        ));
    }

    #[test]
    fn test_length_cap_per_variant() {
        let insights = FormVariant::insights().unwrap();
        let characters = FormVariant::characters().unwrap();
        assert_eq!(insights.max_chars, 200);
        assert_eq!(characters.max_chars, 400);

        assert!(insights.validate(Some("DISC"), &"a".repeat(200)).is_ok());
        assert_eq!(
            insights.validate(Some("DISC"), &"a".repeat(201)),
            Err(ValidationError::TopicTooLong { max: 200, actual: 201 })
        );
        assert!(characters.validate(Some("DISC"), &"a".repeat(400)).is_ok());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let form = FormVariant::insights().unwrap();
        let topic = "é".repeat(200);
        assert!(form.validate(Some("DISC"), &topic).is_ok());
    }

    #[test]
    fn test_crlf_counts_as_one_character() {
        let form = FormVariant::insights().unwrap();
        let topic = format!("{}\r\n", "a".repeat(199));
        assert_eq!(topic_len(&topic), 200);
        let request = form.validate(Some("DISC"), &topic).unwrap();
        assert_eq!(request.topic, topic);

        let over = format!("{}\r\n", "a".repeat(200));
        assert_eq!(
            form.validate(Some("DISC"), &over),
            Err(ValidationError::TopicTooLong { max: 200, actual: 201 })
        );
    }

    #[test]
    fn test_valid_request_keeps_topic_as_entered() {
        let form = FormVariant::characters().unwrap();
        let request = form
            .validate(Some("Myers-Briggs"), " top 5 Harry Potter characters ")
            .unwrap();
        assert_eq!(request.framework, Framework::MyersBriggs);
        assert_eq!(request.topic, " top 5 Harry Potter characters ");
    }

    #[test]
    fn test_registry_lookup() {
        let registry = Registry::builtin().unwrap();
        assert_eq!(registry.variants().len(), 2);
        assert_eq!(
            registry.get(CHARACTERS).unwrap().download_filename,
            "personality_characters.txt"
        );
        assert_eq!(
            registry.get(INSIGHTS).unwrap().download_filename,
            "personality_insights.txt"
        );
        assert!(matches!(
            registry.require("horoscope"),
            Err(CoreError::VariantNotFound(_))
        ));
    }
}
