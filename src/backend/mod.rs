// <FILE>src/backend/mod.rs</FILE> - <DESC>Public backend surface: arithmetic entry points and user-calls</DESC>
// <VERS>VERSION: 1.0.0</VERS>
// <WCTX>Initial implementation</WCTX>
// <CLOG>Initial creation</CLOG>

//! Backend interface: the four arithmetic entry points per operand type,
//! plus the variadic user-call hook (`INEXACT`, `SET_PRECISION_*`).

mod cls_backend;
mod fnc_user_call;

pub use cls_backend::Backend;
pub use fnc_user_call::{FType, UserCall};

// <FILE>src/backend/mod.rs</FILE> - <DESC>Public backend surface: arithmetic entry points and user-calls</DESC>
// <VERS>END OF VERSION: 1.0.0</VERS>
