pub mod csv_out;
pub mod error;

pub use csv_out::{OUTPUT_HEADER, write_links, write_run_report_json};
pub use error::{ReportError, Result};
