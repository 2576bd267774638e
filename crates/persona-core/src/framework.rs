//! Personality frameworks offered in the model selector.

use serde::{Deserialize, Serialize};

/// Label of the selector entry that means "nothing chosen yet".
pub const NO_SELECTION: &str = "Select a model";

/// A personality framework the user can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Framework {
    Disc,
    Enneagram,
    MyersBriggs,
    BigFive,
}

impl Framework {
    /// Every framework, in selector order.
    pub const ALL: [Framework; 4] = [
        Framework::Disc,
        Framework::Enneagram,
        Framework::MyersBriggs,
        Framework::BigFive,
    ];

    /// Name shown to the user and substituted into prompts.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Disc => "DISC",
            Self::Enneagram => "Enneagram",
            Self::MyersBriggs => "Myers-Briggs",
            Self::BigFive => "Big Five",
        }
    }

    /// Form value and CLI argument.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Disc => "disc",
            Self::Enneagram => "enneagram",
            Self::MyersBriggs => "myers_briggs",
            Self::BigFive => "big_five",
        }
    }

    /// Parse a selector value.
    ///
    /// Accepts the display name or the slug, case-insensitively. Returns
    /// `None` for anything else, including the [`NO_SELECTION`] sentinel.
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL.into_iter().find(|f| {
            f.display_name().eq_ignore_ascii_case(s) || f.slug().eq_ignore_ascii_case(s)
        })
    }
}

impl std::fmt::Display for Framework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// True when a raw selector value means "nothing chosen".
pub fn is_no_selection(value: Option<&str>) -> bool {
    match value.map(str::trim) {
        None | Some("") => true,
        Some(v) => v == NO_SELECTION,
    }
}
