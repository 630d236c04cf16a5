//! Link generation: validation plus template substitution.

use thiserror::Error;

use e3link_model::{GeneratedLink, IssueKind, TemplateError, UrlTemplate};

use crate::validate::validate_code;

/// Per-code failure reasons. All of these are recoverable at batch level; the
/// template variant signals a configuration defect rather than bad input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("empty serial code")]
    Empty,

    #[error("invalid characters in serial code: {code}")]
    InvalidCharacters { code: String },

    #[error("template substitution failed: {0}")]
    Template(#[from] TemplateError),
}

impl CodeError {
    pub fn kind(&self) -> IssueKind {
        match self {
            Self::Empty => IssueKind::EmptyCode,
            Self::InvalidCharacters { .. } => IssueKind::InvalidCharacters,
            Self::Template(_) => IssueKind::Template,
        }
    }
}

/// Turn a raw serial code into a generated link.
///
/// Pure and deterministic: the same code and template always produce the same
/// link or the same failure.
pub fn generate_link(raw: &str, template: &UrlTemplate) -> Result<GeneratedLink, CodeError> {
    let code = validate_code(raw)?;
    let link = template.render(code)?;
    Ok(GeneratedLink {
        code: code.to_string(),
        link,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_default_link() {
        let link = generate_link("EAVO53", &UrlTemplate::default()).expect("generate");
        assert_eq!(link.code, "EAVO53");
        assert_eq!(link.link, "https://EAVO53/e3world.co.uk");
    }

    #[test]
    fn code_is_the_trimmed_input() {
        let link = generate_link("  ABC-123 ", &UrlTemplate::default()).expect("generate");
        assert_eq!(link.code, "ABC-123");
        assert_eq!(link.link, "https://ABC-123/e3world.co.uk");
    }

    #[test]
    fn template_failures_surface_as_template_kind() {
        let template = UrlTemplate::from("https://{serial}/e3world.co.uk");
        let error = generate_link("EAVO53", &template).expect_err("bad template");
        assert_eq!(error.kind(), IssueKind::Template);
        assert!(error.to_string().contains("serial"));
    }

    #[test]
    fn validation_runs_before_templating() {
        // A bad code against a bad template reports the code, not the template.
        let template = UrlTemplate::from("no placeholder");
        let error = generate_link("bad code!", &template).expect_err("bad code");
        assert_eq!(error.kind(), IssueKind::InvalidCharacters);
    }
}
