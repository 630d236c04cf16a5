//! Serial code validation.

use crate::generate::CodeError;

/// Validate a raw serial code, returning its trimmed form.
///
/// Codes are ASCII letters, digits, `-`, and `_`, nothing else. The error for
/// a code with other characters carries the trimmed code verbatim so the
/// message can point at the offending input.
pub fn validate_code(raw: &str) -> Result<&str, CodeError> {
    let code = raw.trim();
    if code.is_empty() {
        return Err(CodeError::Empty);
    }
    if !code.chars().all(is_code_char) {
        return Err(CodeError::InvalidCharacters {
            code: code.to_string(),
        });
    }
    Ok(code)
}

fn is_code_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '-' || ch == '_'
}
