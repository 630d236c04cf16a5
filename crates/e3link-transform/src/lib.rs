pub mod generate;
pub mod validate;

pub use generate::{CodeError, generate_link};
pub use validate::validate_code;
