// <FILE>src/inexact/fnc_fast_inexact.rs</FILE> - <DESC>Fast-path INEXACT used by the runtime user-call hook</DESC>
// <VERS>VERSION: 1.0.0</VERS>
// <WCTX>Initial implementation</WCTX>
// <CLOG>Initial creation</CLOG>

use crate::bits::FpClass;
use crate::config::{Context, Mode};

use super::cls_widened::Widened;

/// The fast variant used by the user-visible perturbation hook
/// ([`crate::backend`]'s `INEXACT` user-call): same relative-noise formula
/// as [`super::inexact`], but always applied — no representability check,
/// no sparsity draw — as long as mode isn't IEEE and the class allows it.
pub fn fast_inexact<W: Widened>(x: &mut W, t: u32, ctx: &Context) {
    if ctx.mode() == Mode::Ieee {
        return;
    }
    match x.classify() {
        FpClass::Normal | FpClass::Subnormal => {}
        _ => return,
    }
    *x = x.add_noise_rel(t, ctx.seed(), ctx.choose_seed());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ieee_mode_never_perturbs() {
        let mut ctx = Context::new();
        ctx.apply_option("mode", "ieee").unwrap();
        let mut x = 1.0f64;
        fast_inexact(&mut x, 24, &ctx);
        assert_eq!(x, 1.0);
    }

    #[test]
    fn test_always_perturbs_representable_values_when_not_ieee() {
        let mut ctx = Context::new();
        ctx.apply_option("mode", "rr").unwrap();
        ctx.apply_option("sparsity", "0.0001").unwrap();
        // RR's representability skip and sparsity's skip are both bypassed
        // by the fast path, so an exact power of two still gets noised.
        let mut hit = false;
        for _ in 0..200 {
            let mut x = 2.0f64;
            fast_inexact(&mut x, 24, &ctx);
            if x != 2.0 {
                hit = true;
                break;
            }
        }
        assert!(hit);
    }

    #[test]
    fn test_zero_and_nonfinite_are_never_perturbed() {
        let mut ctx = Context::new();
        ctx.apply_option("mode", "mca").unwrap();
        let mut z = 0.0f64;
        fast_inexact(&mut z, 24, &ctx);
        assert_eq!(z, 0.0);
        let mut inf = f64::INFINITY;
        fast_inexact(&mut inf, 24, &ctx);
        assert!(inf.is_infinite());
    }
}

// <FILE>src/inexact/fnc_fast_inexact.rs</FILE> - <DESC>Fast-path INEXACT used by the runtime user-call hook</DESC>
// <VERS>END OF VERSION: 1.0.0</VERS>
