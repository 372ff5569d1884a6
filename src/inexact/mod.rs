// <FILE>src/inexact/mod.rs</FILE> - <DESC>Shared INEXACT perturbation logic over Widened types</DESC>
// <VERS>VERSION: 1.0.0</VERS>
// <WCTX>Initial implementation</WCTX>
// <CLOG>Initial creation</CLOG>

//! The inexact operator: applies noise to one operand in place, subject to
//! mode/class/representability/sparsity guards.

mod cls_widened;
mod fnc_fast_inexact;
mod fnc_inexact;

pub use cls_widened::Widened;
pub use fnc_fast_inexact::fast_inexact;
pub use fnc_inexact::inexact;

// <FILE>src/inexact/mod.rs</FILE> - <DESC>Shared INEXACT perturbation logic over Widened types</DESC>
// <VERS>END OF VERSION: 1.0.0</VERS>
