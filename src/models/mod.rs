pub mod document;
pub mod enums;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("invalid {field} value: '{value}'")]
    InvalidEnum { field: String, value: String },
}
