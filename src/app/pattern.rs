use crate::app::error::{FileOpsError, Result};
use std::fmt;

pub const DEFAULT_PATTERN: &str = "50.114.4.*";
pub const WILDCARD: char = '*';

/// Filename template with exactly one index position.
///
/// A name matches when it is `prefix`, then one or more ASCII digits, then
/// `suffix`. Nothing else is interpreted, so `.` in the template is literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    prefix: String,
    suffix: String,
}

impl Pattern {
    pub fn parse(template: &str) -> Result<Self> {
        let wildcards = template.matches(WILDCARD).count();
        if wildcards != 1 {
            return Err(FileOpsError::Pattern {
                pattern: template.to_string(),
                reason: format!("expected exactly one '{WILDCARD}', found {wildcards}"),
            });
        }

        if template.contains(['/', '\\']) {
            return Err(FileOpsError::Pattern {
                pattern: template.to_string(),
                reason: "must be a file name, not a path".to_string(),
            });
        }

        Ok(Self::split(template))
    }

    /// Splits around the first wildcard. Callers check the template first.
    fn split(template: &str) -> Self {
        let (prefix, suffix) = template
            .split_once(WILDCARD)
            .unwrap_or((template, ""));
        Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        }
    }

    pub fn render(&self, index: u32) -> String {
        format!("{}{}{}", self.prefix, index, self.suffix)
    }

    pub fn matches(&self, name: &str) -> bool {
        let Some(rest) = name.strip_prefix(&self.prefix) else {
            return false;
        };
        let Some(index) = rest.strip_suffix(&self.suffix) else {
            return false;
        };
        !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit())
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self::split(DEFAULT_PATTERN)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix, WILDCARD, self.suffix)
    }
}
