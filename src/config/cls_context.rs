// <FILE>src/config/cls_context.rs</FILE> - <DESC>Context: atomics-backed runtime configuration state</DESC>
// <VERS>VERSION: 1.0.0</VERS>
// <WCTX>Initial implementation</WCTX>
// <CLOG>Initial creation - Cell replaced with atomics for cross-thread Sync</CLOG>

use std::sync::atomic::{AtomicI32, AtomicU32, AtomicU8, Ordering};

use super::{ConfigError, ErrorMode, Mode};

const T32_MIN: u32 = 1;
const T32_MAX: u32 = 53;
const T64_MIN: u32 = 1;
const T64_MAX: u32 = 112;

const T32_DEFAULT: u32 = 24;
const T64_DEFAULT: u32 = 53;
const ABS_ERR_EXP_DEFAULT: i32 = 112;

// No ordering is promised across threads for these fields (§5): relaxed is
// the right discipline for a value a host may flip between operations
// without synchronizing with the threads that read it.
const ORD: Ordering = Ordering::Relaxed;

/// Built once at backend init. `t32`/`t64`/`mode`/`error_mode`/`abs_err_exp`
/// can still be changed afterwards — by the runtime `SET_PRECISION_*`
/// user-call, or by re-applying an option — so they're stored as atomics
/// rather than plain fields: arithmetic entry points read them from any
/// number of host threads in parallel (§5), and a `Cell` wouldn't be `Sync`.
/// No internal lock is promised beyond that; a racing writer and reader
/// simply observe a before-or-after value, never a torn one.
pub struct Context {
    t32: AtomicU32,
    t64: AtomicU32,
    mode: AtomicU8,
    error_mode: AtomicU8,
    abs_err_exp: AtomicI32,
    seed: u64,
    choose_seed: bool,
    daz: bool,
    ftz: bool,
    sparsity: f64,
}

impl Default for Context {
    fn default() -> Self {
        Context {
            t32: AtomicU32::new(T32_DEFAULT),
            t64: AtomicU32::new(T64_DEFAULT),
            mode: AtomicU8::new(Mode::Mca.to_u8()),
            error_mode: AtomicU8::new(ErrorMode::Rel.to_u8()),
            abs_err_exp: AtomicI32::new(ABS_ERR_EXP_DEFAULT),
            seed: 0,
            choose_seed: false,
            daz: false,
            ftz: false,
            sparsity: 1.0,
        }
    }
}

impl Context {
    pub fn new() -> Self {
        Context::default()
    }

    pub fn t32(&self) -> u32 {
        self.t32.load(ORD)
    }

    pub fn t64(&self) -> u32 {
        self.t64.load(ORD)
    }

    pub fn mode(&self) -> Mode {
        Mode::from_u8(self.mode.load(ORD))
    }

    pub fn error_mode(&self) -> ErrorMode {
        ErrorMode::from_u8(self.error_mode.load(ORD))
    }

    pub fn abs_err_exp(&self) -> i32 {
        self.abs_err_exp.load(ORD)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn choose_seed(&self) -> bool {
        self.choose_seed
    }

    pub fn daz(&self) -> bool {
        self.daz
    }

    pub fn ftz(&self) -> bool {
        self.ftz
    }

    pub fn sparsity(&self) -> f64 {
        self.sparsity
    }

    /// Replace `t32` at runtime, the realization of the `SET_PRECISION_BINARY32`
    /// user-call.
    pub fn set_t32(&self, t: u32) -> Result<(), ConfigError> {
        validate_range("precision-binary32", t, T32_MIN, T32_MAX)?;
        self.t32.store(t, ORD);
        Ok(())
    }

    /// Replace `t64` at runtime, the realization of the `SET_PRECISION_BINARY64`
    /// user-call.
    pub fn set_t64(&self, t: u32) -> Result<(), ConfigError> {
        validate_range("precision-binary64", t, T64_MIN, T64_MAX)?;
        self.t64.store(t, ORD);
        Ok(())
    }

    /// Apply one long-option configuration setting, as the backend init
    /// path parses its option table.
    pub fn apply_option(&mut self, option: &str, value: &str) -> Result<(), ConfigError> {
        match option {
            "precision-binary32" => {
                let t = parse_int("precision-binary32", value)?;
                self.set_t32(t)
            }
            "precision-binary64" => {
                let t = parse_int("precision-binary64", value)?;
                self.set_t64(t)
            }
            "mode" => {
                let mode: Mode = value.parse()?;
                self.mode.store(mode.to_u8(), ORD);
                Ok(())
            }
            "error-mode" => {
                let error_mode: ErrorMode = value.parse()?;
                self.error_mode.store(error_mode.to_u8(), ORD);
                Ok(())
            }
            "max-abs-error-exponent" => {
                let e: i32 = value.parse().map_err(|_| ConfigError::InvalidValue {
                    option: "max-abs-error-exponent",
                    value: value.to_string(),
                })?;
                self.abs_err_exp.store(e, ORD);
                Ok(())
            }
            "seed" => {
                self.seed = value.parse().map_err(|_| ConfigError::InvalidValue {
                    option: "seed",
                    value: value.to_string(),
                })?;
                self.choose_seed = true;
                Ok(())
            }
            "daz" => {
                self.daz = true;
                Ok(())
            }
            "ftz" => {
                self.ftz = true;
                Ok(())
            }
            "sparsity" => {
                let s: f64 = value.parse().map_err(|_| ConfigError::InvalidValue {
                    option: "sparsity",
                    value: value.to_string(),
                })?;
                if !(s > 0.0 && s <= 1.0) {
                    return Err(ConfigError::OutOfRange {
                        option: "sparsity",
                        value: value.to_string(),
                        expected: "0 < s <= 1",
                    });
                }
                self.sparsity = s;
                Ok(())
            }
            other => Err(ConfigError::UnknownOption(other.to_string())),
        }
    }

    /// A single structured line listing every effective option value, for
    /// reproducibility of experimental runs. Emitted via `tracing` on init;
    /// also returned so callers (and tests) can inspect it directly.
    pub fn info_header(&self) -> String {
        let header = serde_json::json!({
            "t32": self.t32(),
            "t64": self.t64(),
            "mode": format!("{:?}", self.mode()),
            "error_mode": format!("{:?}", self.error_mode()),
            "abs_err_exp": self.abs_err_exp(),
            "seed": self.seed,
            "choose_seed": self.choose_seed,
            "daz": self.daz,
            "ftz": self.ftz,
            "sparsity": self.sparsity,
        })
        .to_string();
        tracing::info!(target: "mca_noise::config", "{}", header);
        header
    }
}

fn parse_int(option: &'static str, value: &str) -> Result<u32, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        option,
        value: value.to_string(),
    })
}

fn validate_range(option: &'static str, t: u32, min: u32, max: u32) -> Result<(), ConfigError> {
    if t < min || t > max {
        return Err(ConfigError::OutOfRange {
            option,
            value: t.to_string(),
            expected: match option {
                "precision-binary32" => "1 <= t <= 53",
                "precision-binary64" => "1 <= t <= 112",
                _ => "in range",
            },
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_spec() {
        let ctx = Context::new();
        assert_eq!(ctx.t32(), 24);
        assert_eq!(ctx.t64(), 53);
        assert_eq!(ctx.abs_err_exp(), 112);
        assert_eq!(ctx.sparsity(), 1.0);
        assert!(!ctx.choose_seed());
    }

    #[test]
    fn test_set_t32_rejects_out_of_range() {
        let ctx = Context::new();
        assert!(ctx.set_t32(0).is_err());
        assert!(ctx.set_t32(54).is_err());
        assert!(ctx.set_t32(53).is_ok());
        assert_eq!(ctx.t32(), 53);
    }

    #[test]
    fn test_set_t64_rejects_out_of_range() {
        let ctx = Context::new();
        assert!(ctx.set_t64(0).is_err());
        assert!(ctx.set_t64(113).is_err());
        assert!(ctx.set_t64(112).is_ok());
    }

    #[test]
    fn test_apply_option_seed_sets_choose_seed() {
        let mut ctx = Context::new();
        ctx.apply_option("seed", "42").unwrap();
        assert_eq!(ctx.seed(), 42);
        assert!(ctx.choose_seed());
    }

    #[test]
    fn test_apply_option_mode_and_error_mode() {
        let mut ctx = Context::new();
        ctx.apply_option("mode", "RR").unwrap();
        assert_eq!(ctx.mode(), Mode::Rr);
        ctx.apply_option("error-mode", "all").unwrap();
        assert_eq!(ctx.error_mode(), ErrorMode::All);
    }

    #[test]
    fn test_apply_option_sparsity_validates_range() {
        let mut ctx = Context::new();
        assert!(ctx.apply_option("sparsity", "0").is_err());
        assert!(ctx.apply_option("sparsity", "1.5").is_err());
        assert!(ctx.apply_option("sparsity", "0.5").is_ok());
        assert_eq!(ctx.sparsity(), 0.5);
    }

    #[test]
    fn test_apply_option_daz_ftz_flags() {
        let mut ctx = Context::new();
        ctx.apply_option("daz", "").unwrap();
        ctx.apply_option("ftz", "").unwrap();
        assert!(ctx.daz());
        assert!(ctx.ftz());
    }

    #[test]
    fn test_apply_option_unknown_is_rejected() {
        let mut ctx = Context::new();
        assert_eq!(
            ctx.apply_option("bogus", "1"),
            Err(ConfigError::UnknownOption("bogus".to_string()))
        );
    }

    #[test]
    fn test_info_header_is_valid_json_with_effective_values() {
        let ctx = Context::new();
        let header = ctx.info_header();
        let parsed: serde_json::Value = serde_json::from_str(&header).unwrap();
        assert_eq!(parsed["t32"], 24);
        assert_eq!(parsed["t64"], 53);
    }

    #[test]
    fn test_context_is_sync_for_cross_thread_arithmetic() {
        fn assert_sync<T: Sync>() {}
        assert_sync::<Context>();
    }
}

// <FILE>src/config/cls_context.rs</FILE> - <DESC>Context: atomics-backed runtime configuration state</DESC>
// <VERS>END OF VERSION: 1.0.0</VERS>
