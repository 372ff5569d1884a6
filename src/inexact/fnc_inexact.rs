// <FILE>src/inexact/fnc_inexact.rs</FILE> - <DESC>Full INEXACT: class guard, representability skip, sparsity, noise</DESC>
// <VERS>VERSION: 1.0.0</VERS>
// <WCTX>Initial implementation</WCTX>
// <CLOG>Initial creation</CLOG>

use crate::bits::FpClass;
use crate::config::{Context, Mode};

use super::cls_widened::Widened;

/// Apply noise to `*x` in place, at virtual precision `t`.
///
/// Suppress-guards, in order: IEEE mode never perturbs; zero/inf/nan are
/// never perturbed; RR mode skips operands already exact at `t`; sparsity
/// then gives each surviving operand a `1 - sparsity` chance to still be
/// skipped.
pub fn inexact<W: Widened>(x: &mut W, t: u32, ctx: &Context) {
    if ctx.mode() == Mode::Ieee {
        return;
    }
    match x.classify() {
        FpClass::Normal | FpClass::Subnormal => {}
        _ => return,
    }
    if ctx.mode() == Mode::Rr && x.representable(t) {
        return;
    }
    if crate::rng::skip(ctx.sparsity(), ctx.seed(), ctx.choose_seed()) {
        return;
    }

    let em = ctx.error_mode();
    if em.has_rel() {
        *x = x.add_noise_rel(t, ctx.seed(), ctx.choose_seed());
    }
    if em.has_abs() {
        *x = x.add_noise_abs(ctx.abs_err_exp(), ctx.seed(), ctx.choose_seed());
    }
}


// <FILE>src/inexact/fnc_inexact.rs</FILE> - <DESC>Full INEXACT: class guard, representability skip, sparsity, noise</DESC>
// <VERS>END OF VERSION: 1.0.0</VERS>
