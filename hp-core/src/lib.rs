//! hostprint Core Library
//!
//! Derives a stable, host-specific fingerprint from hardware attributes.
//!
//! # Module Structure
//!
//! - `provider` - provider kinds and provider sets (canonical evaluation order)
//! - `source` - the `HardwareInfoSource` capability consumed by the engine
//! - `hash` - SHA-1 hashing, hex rendering, beautifying and salting
//! - `calculator` - the layered fingerprint computation
//!
//! # Example
//!
//! ```no_run
//! use hp_core::{FingerprintCalculator, HardwareInfoSource, ProviderSet};
//!
//! fn print_fingerprint<S: HardwareInfoSource>(source: S) -> hp_core::Result<()> {
//!     let calc = FingerprintCalculator::new(source);
//!     println!("{}", calc.compute(ProviderSet::all())?);
//!     println!("{}", calc.compute_with_salt("my-salt")?);
//!     Ok(())
//! }
//! ```

pub mod calculator;
pub mod constants;
pub mod hash;
pub mod provider;
pub mod source;

// Re-export error types
pub use hp_error::{FingerprintError, Result};

pub use calculator::{FingerprintCalculator, FingerprintReport, ProviderContribution};
pub use hash::{beautify, saltify, sha1_hex, FingerprintHash, FormattedFingerprint};
pub use provider::{ProviderKind, ProviderSet};
pub use source::{system_root_path, HardwareInfoSource};
