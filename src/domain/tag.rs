use regex::Regex;
use std::fmt::{self, Display, Formatter};
use std::sync::LazyLock;

// Supercell tags share one alphabet across all three games.
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0289PYLQGRJCUV]{3,15}$").expect("Invalid regex"));

/// A player tag in canonical form: uppercase, single leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerTag(String);

impl PlayerTag {
    /// Parses user input into a canonical tag. Input may omit the leading
    /// `#` and use any casing; surrounding whitespace is ignored.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let mut candidate = input.trim().to_uppercase();

        if !candidate.starts_with('#') {
            candidate.insert(0, '#');
        }

        TAG_PATTERN.is_match(&candidate).then_some(Self(candidate))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The tag without its leading `#`, as provider URLs expect it.
    #[must_use]
    pub fn bare(&self) -> &str {
        &self.0[1..]
    }

    /// The tag with `#` percent-encoded, as stats API paths expect it.
    #[must_use]
    pub fn encoded(&self) -> String {
        format!("%23{}", self.bare())
    }
}

impl Display for PlayerTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
