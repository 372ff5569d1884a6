// <FILE>src/config/cls_error.rs</FILE> - <DESC>ConfigError for option parsing and range validation</DESC>
// <VERS>VERSION: 1.0.0</VERS>
// <WCTX>Initial implementation</WCTX>
// <CLOG>Initial creation</CLOG>

use thiserror::Error;

/// Configuration errors: fatal, surfaced before any arithmetic runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown option `{0}`")]
    UnknownOption(String),

    #[error("invalid value for `{option}`: {value}")]
    InvalidValue { option: &'static str, value: String },

    #[error("`{option}` out of range: {value} (expected {expected})")]
    OutOfRange {
        option: &'static str,
        value: String,
        expected: &'static str,
    },
}

// <FILE>src/config/cls_error.rs</FILE> - <DESC>ConfigError for option parsing and range validation</DESC>
// <VERS>END OF VERSION: 1.0.0</VERS>
