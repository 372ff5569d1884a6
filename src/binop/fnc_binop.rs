// <FILE>src/binop/fnc_binop.rs</FILE> - <DESC>binop_f32/binop_f64: DAZ, widen, perturb, compute, narrow, FTZ</DESC>
// <VERS>VERSION: 1.0.0</VERS>
// <WCTX>Initial implementation</WCTX>
// <CLOG>Initial creation</CLOG>

use crate::bits;
use crate::config::{Context, Mode};
use crate::inexact;
use crate::wide::Extended;

/// The four arithmetic operators this engine intercepts. Unary and
/// comparison operators are out of scope (§6): there is no catch-all
/// "unrecognized operator" error path here, since the type itself rules
/// that case out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operation {
    fn apply_f64(self, a: f64, b: f64) -> f64 {
        match self {
            Operation::Add => a + b,
            Operation::Sub => a - b,
            Operation::Mul => a * b,
            Operation::Div => a / b,
        }
    }

    fn apply_ext(self, a: Extended, b: Extended) -> Extended {
        match self {
            Operation::Add => a + b,
            Operation::Sub => a - b,
            Operation::Mul => a * b,
            Operation::Div => a / b,
        }
    }
}

/// `mca(a op b)` for binary32 operands, computed at binary64 working
/// precision.
///
/// DAZ is evaluated against `a`/`b` at their native binary32 width before
/// widening — a subnormal binary32 value widens into a perfectly normal
/// binary64 one, so checking subnormal-ness after widening would never
/// fire. FTZ mirrors this: it's evaluated after narrowing the result back
/// to binary32, not on the binary64 working value.
pub fn binop_f32(a: f32, b: f32, op: Operation, ctx: &Context) -> f32 {
    let (a, b) = if ctx.daz() {
        (bits::daz(a), bits::daz(b))
    } else {
        (a, b)
    };

    let mut wa = a as f64;
    let mut wb = b as f64;
    if matches!(ctx.mode(), Mode::Pb | Mode::Mca) {
        inexact::inexact(&mut wa, ctx.t32(), ctx);
        inexact::inexact(&mut wb, ctx.t32(), ctx);
    }

    let mut r = op.apply_f64(wa, wb);
    if matches!(ctx.mode(), Mode::Rr | Mode::Mca) {
        inexact::inexact(&mut r, ctx.t32(), ctx);
    }

    let narrowed = r as f32;
    if ctx.ftz() {
        bits::ftz(narrowed)
    } else {
        narrowed
    }
}

/// `mca(a op b)` for binary64 operands, computed at the [`Extended`]
/// working precision. Same DAZ/FTZ placement rationale as [`binop_f32`].
pub fn binop_f64(a: f64, b: f64, op: Operation, ctx: &Context) -> f64 {
    let (a, b) = if ctx.daz() {
        (bits::daz(a), bits::daz(b))
    } else {
        (a, b)
    };

    let mut wa = Extended::from_f64(a);
    let mut wb = Extended::from_f64(b);
    if matches!(ctx.mode(), Mode::Pb | Mode::Mca) {
        inexact::inexact(&mut wa, ctx.t64(), ctx);
        inexact::inexact(&mut wb, ctx.t64(), ctx);
    }

    let mut r = op.apply_ext(wa, wb);
    if matches!(ctx.mode(), Mode::Rr | Mode::Mca) {
        inexact::inexact(&mut r, ctx.t64(), ctx);
    }

    let narrowed = r.to_f64();
    if ctx.ftz() {
        bits::ftz(narrowed)
    } else {
        narrowed
    }
}


// <FILE>src/binop/fnc_binop.rs</FILE> - <DESC>binop_f32/binop_f64: DAZ, widen, perturb, compute, narrow, FTZ</DESC>
// <VERS>END OF VERSION: 1.0.0</VERS>
