//! Lookup-table waveform generator.
//!
//! The tables are built once from a [`GeneratorConfig`] and then streamed one
//! sample per clock cycle by a [`Stepper`], with `valid`/`last` flags in the
//! style of a streaming bus.
//!
//! ```
//! use wavelut_dsp::{FunctionType, GeneratorConfig};
//!
//! let mut stepper = GeneratorConfig::new(8, FunctionType::Exp).build().unwrap();
//! let out = stepper.tick(false);
//! assert!(out.valid);
//! assert_eq!((out.real, out.imag), (32767, 0));
//! ```

pub mod config;
pub mod error;
pub mod fixed;
pub mod lut;
pub mod math;
pub mod stepper;

pub use config::{FunctionType, GeneratorConfig};
pub use error::{ConfigError, ConfigResult};
pub use lut::{build_luts, Luts};
pub use stepper::{Output, State, Stepper};
