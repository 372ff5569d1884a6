// <FILE>src/backend/fnc_user_call.rs</FILE> - <DESC>FType/UserCall enums and effective-precision resolution</DESC>
// <VERS>VERSION: 1.0.0</VERS>
// <WCTX>Initial implementation</WCTX>
// <CLOG>Initial creation - added InexactQuad so INEXACT can perturb all three ftypes</CLOG>

//! The variadic user-call hook: `INEXACT` and the runtime `SET_PRECISION_*`
//! knobs, dispatched through a typed enum instead of an integer call ID.

/// Operand width tag, mirroring the three `ftype` values a host can pass
/// to the `INEXACT` call. All three perturb in place; `InexactUnsupported`
/// exists for operand widths beyond these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FType {
    Float,
    Double,
    Quad,
}

/// One user-call invocation. The call ID a C host would pass is folded
/// into the variant itself, so there's no "unrecognized ID" branch to
/// write for IDs this crate knows about — only for genuinely unsupported
/// operand widths, via `InexactUnsupported`.
pub enum UserCall<'a> {
    InexactF32 { value: &'a mut f32, precision: i32 },
    InexactF64 { value: &'a mut f64, precision: i32 },
    InexactQuad {
        value: &'a mut crate::wide::Extended,
        precision: i32,
    },
    InexactUnsupported(FType),
    SetPrecisionBinary32(u32),
    SetPrecisionBinary64(u32),
}

/// `precision <= 0` is an offset relative to `base_t`; otherwise it's an
/// absolute virtual precision. Clamped to a minimum of 1 — a precision of
/// zero or fewer bits isn't meaningful.
pub(super) fn effective_precision(precision: i32, base_t: u32) -> u32 {
    if precision <= 0 {
        (base_t as i32 + precision).max(1) as u32
    } else {
        precision as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_precision_offsets_the_base() {
        assert_eq!(effective_precision(0, 24), 24);
        assert_eq!(effective_precision(-4, 24), 20);
    }

    #[test]
    fn test_relative_precision_clamps_at_one() {
        assert_eq!(effective_precision(-100, 24), 1);
    }

    #[test]
    fn test_positive_precision_is_absolute() {
        assert_eq!(effective_precision(10, 24), 10);
    }
}

// <FILE>src/backend/fnc_user_call.rs</FILE> - <DESC>FType/UserCall enums and effective-precision resolution</DESC>
// <VERS>END OF VERSION: 1.0.0</VERS>
