//! URL template with a single `{code}` substitution placeholder.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Template applied when none is configured.
pub const DEFAULT_TEMPLATE: &str = "https://{code}/e3world.co.uk";

/// Name of the only placeholder a template may contain.
pub const PLACEHOLDER_NAME: &str = "code";

/// Errors raised while substituting a code into a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("template has no {{code}} placeholder: {template}")]
    MissingPlaceholder { template: String },

    #[error("template has {count} {{code}} placeholders, expected exactly one")]
    MultiplePlaceholders { count: usize },

    #[error("unknown template placeholder: {{{name}}}")]
    UnknownPlaceholder { name: String },

    #[error("unclosed '{{' in template: {template}")]
    UnclosedPlaceholder { template: String },
}

/// A configuration string mapping serial codes to links.
///
/// Construction accepts any string; [`UrlTemplate::render`] reports malformed
/// templates per substitution so a bad `--template` value is recorded against
/// each record instead of aborting the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UrlTemplate {
    raw: String,
}

impl Default for UrlTemplate {
    fn default() -> Self {
        Self {
            raw: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

impl From<String> for UrlTemplate {
    fn from(raw: String) -> Self {
        Self { raw }
    }
}

impl From<&str> for UrlTemplate {
    fn from(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
        }
    }
}

impl UrlTemplate {
    /// The raw template string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Substitute `code` into the `{code}` placeholder.
    ///
    /// Pure and deterministic: the same template and code always yield the same
    /// link or the same error. Exactly one placeholder is required; zero,
    /// repeats, an unknown name, or an unclosed brace are all malformed.
    pub fn render(&self, code: &str) -> Result<String, TemplateError> {
        let mut out = String::with_capacity(self.raw.len() + code.len());
        let mut rest = self.raw.as_str();
        let mut substitutions = 0usize;
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                return Err(TemplateError::UnclosedPlaceholder {
                    template: self.raw.clone(),
                });
            };
            let name = &after[..close];
            if name != PLACEHOLDER_NAME {
                return Err(TemplateError::UnknownPlaceholder {
                    name: name.to_string(),
                });
            }
            out.push_str(code);
            substitutions += 1;
            rest = &after[close + 1..];
        }
        match substitutions {
            0 => Err(TemplateError::MissingPlaceholder {
                template: self.raw.clone(),
            }),
            1 => {
                out.push_str(rest);
                Ok(out)
            }
            count => Err(TemplateError::MultiplePlaceholders { count }),
        }
    }
}
