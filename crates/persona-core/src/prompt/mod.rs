//! Prompt template store.
//!
//! Templates are rendered with Tera, autoescape off, so the framework name
//! and topic land in the prompt exactly as given.

pub mod templates;

use tera::{Context, Tera};

use crate::error::{CoreError, CoreResult};
use crate::form::model::Request;

pub use templates::{CHARACTERS_TEMPLATE, INSIGHTS_TEMPLATE};

/// Slot receiving the framework display name.
pub const FRAMEWORK_SLOT: &str = "framework";

/// Slot receiving the user's topic text.
pub const TOPIC_SLOT: &str = "topic";

/// A fixed prompt template with a framework slot and a topic slot.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    name: String,
    tera: Tera,
}

impl PromptTemplate {
    /// Compile a template. Both slots must appear in `source`.
    pub fn new(name: &str, source: &str) -> CoreResult<Self> {
        let found = slots(source);
        for required in [FRAMEWORK_SLOT, TOPIC_SLOT] {
            if !found.contains(&required) {
                return Err(CoreError::template(format!(
                    "template '{}' is missing the '{}' slot",
                    name, required
                )));
            }
        }

        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_template(name, source)
            .map_err(|e| CoreError::template(format!("template '{}': {}", name, e)))?;

        Ok(Self {
            name: name.to_string(),
            tera,
        })
    }

    /// Fill both slots from a validated request.
    pub fn render(&self, request: &Request) -> CoreResult<String> {
        let mut ctx = Context::new();
        ctx.insert(FRAMEWORK_SLOT, request.framework.display_name());
        ctx.insert(TOPIC_SLOT, &request.topic);

        self.tera
            .render(&self.name, &ctx)
            .map_err(|e| CoreError::template(format!("template '{}': {}", self.name, e)))
    }
}

/// Names of the `{{ ... }}` expressions in a template, trimmed.
fn slots(source: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut rest = source;
    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                found.push(after[..end].trim_matches(|c: char| c.is_whitespace() || c == '-'));
                rest = &after[end + 2..];
            }
            None => break,
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::Framework;

    fn request(framework: Framework, topic: &str) -> Request {
        Request {
            framework,
            topic: topic.to_string(),
        }
    }

    #[test]
    fn test_render_substitutes_verbatim() {
        let template = PromptTemplate::new("characters", CHARACTERS_TEMPLATE).unwrap();
        let topic = "top 5 Harry Potter characters";
        let prompt = template.render(&request(Framework::MyersBriggs, topic)).unwrap();

        assert!(prompt.contains("THE SELECTED FRAMEWORK IS: Myers-Briggs"));
        assert!(prompt.contains(topic));

        let expected = CHARACTERS_TEMPLATE
            .replace("{{ framework }}", "Myers-Briggs")
            .replace("{{ topic }}", topic);
        assert_eq!(prompt, expected);
    }

    #[test]
    fn test_render_does_not_escape_or_reparse() {
        let template = PromptTemplate::new("insights", INSIGHTS_TEMPLATE).unwrap();
        let topic = "  <b>dating</b> & \"conflict\" {{ framework }}  ";
        let prompt = template.render(&request(Framework::BigFive, topic)).unwrap();

        let expected = INSIGHTS_TEMPLATE
            .replace("{{ framework }}", "Big Five")
            .replace("{{ topic }}", topic);
        assert_eq!(prompt, expected);
    }

    #[test]
    fn test_missing_slot_is_rejected() {
        let err = PromptTemplate::new("broken", "Framework: {{ framework }} only").unwrap_err();
        assert!(matches!(err, CoreError::Template(_)));
        assert!(err.to_string().contains("topic"));
    }

    #[test]
    fn test_slots_tolerate_spacing() {
        assert_eq!(slots("{{framework}} and {{  topic }}"), vec!["framework", "topic"]);
        assert!(PromptTemplate::new("tight", "{{framework}}/{{topic}}").is_ok());
    }
}
