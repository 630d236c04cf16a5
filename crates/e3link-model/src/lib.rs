pub mod record;
pub mod template;

pub use record::{CodeRecord, GeneratedLink, IssueKind, RecordIssue, RunReport};
pub use template::{DEFAULT_TEMPLATE, TemplateError, UrlTemplate};
