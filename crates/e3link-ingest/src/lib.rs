pub mod code_table;
pub mod discovery;
pub mod error;
pub mod sniff;

pub use code_table::{
    CodeTable, IngestOptions, is_header_cell, read_code_table, read_code_table_with_options,
};
pub use discovery::{find_default_input, list_csv_files};
pub use error::{IngestError, Result};
pub use sniff::{DEFAULT_DELIMITER, SAMPLE_LEN, delimiter_name, detect_delimiter, read_sample};
