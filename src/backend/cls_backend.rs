// <FILE>src/backend/cls_backend.rs</FILE> - <DESC>Backend: arithmetic entry points plus user-call dispatch</DESC>
// <VERS>VERSION: 1.0.0</VERS>
// <WCTX>Initial implementation</WCTX>
// <CLOG>Initial creation - wired InexactQuad through to fast_inexact</CLOG>

use crate::binop::{self, Operation};
use crate::config::{ConfigError, Context};
use crate::inexact;

use super::fnc_user_call::effective_precision;
use super::{FType, UserCall};

/// The four arithmetic entry points per operand type, plus the user-call
/// hook. The host calls these in place of its native `+ - * /`; unary and
/// comparison slots are intentionally unimplemented (§6).
pub struct Backend {
    ctx: Context,
}

impl Default for Backend {
    fn default() -> Self {
        Backend::new(Context::new())
    }
}

impl Backend {
    pub fn new(ctx: Context) -> Self {
        Backend { ctx }
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn apply_option(&mut self, option: &str, value: &str) -> Result<(), ConfigError> {
        self.ctx.apply_option(option, value)
    }

    pub fn add_f32(&self, a: f32, b: f32) -> f32 {
        binop::binop_f32(a, b, Operation::Add, &self.ctx)
    }

    pub fn sub_f32(&self, a: f32, b: f32) -> f32 {
        binop::binop_f32(a, b, Operation::Sub, &self.ctx)
    }

    pub fn mul_f32(&self, a: f32, b: f32) -> f32 {
        binop::binop_f32(a, b, Operation::Mul, &self.ctx)
    }

    pub fn div_f32(&self, a: f32, b: f32) -> f32 {
        binop::binop_f32(a, b, Operation::Div, &self.ctx)
    }

    pub fn add_f64(&self, a: f64, b: f64) -> f64 {
        binop::binop_f64(a, b, Operation::Add, &self.ctx)
    }

    pub fn sub_f64(&self, a: f64, b: f64) -> f64 {
        binop::binop_f64(a, b, Operation::Sub, &self.ctx)
    }

    pub fn mul_f64(&self, a: f64, b: f64) -> f64 {
        binop::binop_f64(a, b, Operation::Mul, &self.ctx)
    }

    pub fn div_f64(&self, a: f64, b: f64) -> f64 {
        binop::binop_f64(a, b, Operation::Div, &self.ctx)
    }

    /// Dispatch one user-call. Unsupported operand widths and `SET_PRECISION_*`
    /// range errors are logged as warnings rather than propagated, matching
    /// the user-call hook's "emit a warning and return" contract (§4.7) —
    /// this is a side channel, not the init-time configuration path that
    /// fails fatally on a bad value.
    pub fn user_call(&self, call: UserCall<'_>) {
        match call {
            UserCall::InexactF32 { value, precision } => {
                let t = effective_precision(precision, self.ctx.t32());
                inexact::fast_inexact(value, t, &self.ctx);
            }
            UserCall::InexactF64 { value, precision } => {
                let t = effective_precision(precision, self.ctx.t64());
                inexact::fast_inexact(value, t, &self.ctx);
            }
            UserCall::InexactQuad { value, precision } => {
                // The original FQUAD branch takes precision as an absolute
                // virtual precision, with no base_t offset — there's no
                // separate configured quad precision to offset from.
                let t = precision.max(1) as u32;
                inexact::fast_inexact(value, t, &self.ctx);
            }
            UserCall::InexactUnsupported(ftype) => {
                tracing::warn!(target: "mca_noise::backend", ?ftype, "INEXACT called for an unsupported operand width");
            }
            UserCall::SetPrecisionBinary32(t) => {
                if let Err(err) = self.ctx.set_t32(t) {
                    tracing::warn!(target: "mca_noise::backend", %err, "SET_PRECISION_BINARY32 rejected");
                }
            }
            UserCall::SetPrecisionBinary64(t) => {
                if let Err(err) = self.ctx.set_t64(t) {
                    tracing::warn!(target: "mca_noise::backend", %err, "SET_PRECISION_BINARY64 rejected");
                }
            }
        }
    }
}


// <FILE>src/backend/cls_backend.rs</FILE> - <DESC>Backend: arithmetic entry points plus user-call dispatch</DESC>
// <VERS>END OF VERSION: 1.0.0</VERS>
