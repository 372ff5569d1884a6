// <FILE>src/config/mod.rs</FILE> - <DESC>Runtime configuration: modes, error modes, and the mutable context</DESC>
// <VERS>VERSION: 1.0.0</VERS>
// <WCTX>Initial implementation</WCTX>
// <CLOG>Initial creation</CLOG>

//! Configuration surface: modes, precisions, and the context both
//! [`crate::inexact`] and [`crate::binop`] read on every call.

mod cls_context;
mod cls_error;
mod cls_mode;

pub use cls_context::Context;
pub use cls_error::ConfigError;
pub use cls_mode::{ErrorMode, Mode};

// <FILE>src/config/mod.rs</FILE> - <DESC>Runtime configuration: modes, error modes, and the mutable context</DESC>
// <VERS>END OF VERSION: 1.0.0</VERS>
