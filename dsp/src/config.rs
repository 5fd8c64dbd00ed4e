//! Generator configuration.
//!
//! Both settings are fixed for the lifetime of a generator: the table size
//! determines the lookup tables and the index wrap point, and the function
//! type selects which pair of tables is streamed.

use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigError, ConfigResult};
use crate::lut::Luts;
use crate::stepper::Stepper;

/// The signal family streamed by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionType {
    /// Complex exponential: `(cos, sin)`.
    Exp,
    /// Sinc on both rails.
    Sinc,
    /// Rectangular window on both rails.
    Rect,
}

impl FunctionType {
    pub const ALL: [FunctionType; 3] = [FunctionType::Exp, FunctionType::Sinc, FunctionType::Rect];

    /// Raw selector code, as written into the generator's function register.
    pub fn code(self) -> u8 {
        match self {
            FunctionType::Exp => 0,
            FunctionType::Sinc => 1,
            FunctionType::Rect => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FunctionType::Exp => "exp",
            FunctionType::Sinc => "sinc",
            FunctionType::Rect => "rect",
        }
    }
}

impl TryFrom<u8> for FunctionType {
    type Error = ConfigError;

    fn try_from(code: u8) -> ConfigResult<Self> {
        match code {
            0 => Ok(FunctionType::Exp),
            1 => Ok(FunctionType::Sinc),
            2 => Ok(FunctionType::Rect),
            other => Err(ConfigError::UnknownSelectorCode(other)),
        }
    }
}

impl FromStr for FunctionType {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        FunctionType::ALL
            .into_iter()
            .find(|function| function.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownFunction(s.to_string()))
    }
}

impl fmt::Display for FunctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration-time parameters of a generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of entries in each lookup table.
    pub table_size: usize,
    /// Which signal family to stream.
    pub function: FunctionType,
}

impl GeneratorConfig {
    pub fn new(table_size: usize, function: FunctionType) -> Self {
        Self {
            table_size,
            function,
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.table_size == 0 {
            return Err(ConfigError::ZeroTableSize);
        }
        Ok(())
    }

    /// Validate the configuration, build the lookup tables and return a
    /// stepper in its reset state.
    pub fn build(&self) -> ConfigResult<Stepper> {
        self.validate()?;
        tracing::debug!(
            table_size = self.table_size,
            function = %self.function,
            "configuring generator"
        );
        Ok(Stepper::new(Luts::new(self.table_size), self.function))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_codes_roundtrip() {
        for function in FunctionType::ALL {
            assert_eq!(FunctionType::try_from(function.code()), Ok(function));
        }
        assert_eq!(
            FunctionType::try_from(3),
            Err(ConfigError::UnknownSelectorCode(3))
        );
    }

    #[test]
    fn parse_function_names() {
        assert_eq!("exp".parse::<FunctionType>(), Ok(FunctionType::Exp));
        assert_eq!("SINC".parse::<FunctionType>(), Ok(FunctionType::Sinc));
        assert_eq!(" Rect ".parse::<FunctionType>(), Ok(FunctionType::Rect));
        assert_eq!(
            "square".parse::<FunctionType>(),
            Err(ConfigError::UnknownFunction("square".to_string()))
        );
    }

    #[test]
    fn display_matches_parse() {
        for function in FunctionType::ALL {
            assert_eq!(function.to_string().parse::<FunctionType>(), Ok(function));
        }
    }

    #[test]
    fn zero_table_size_is_rejected() {
        let config = GeneratorConfig::new(0, FunctionType::Exp);
        assert_eq!(config.validate(), Err(ConfigError::ZeroTableSize));
        assert!(matches!(config.build(), Err(ConfigError::ZeroTableSize)));
    }

    #[test]
    fn build_produces_reset_stepper() {
        let stepper = GeneratorConfig::new(8, FunctionType::Rect)
            .build()
            .unwrap();
        assert_eq!(stepper.index(), 0);
        assert_eq!(stepper.luts().len(), 8);
        assert_eq!(stepper.function(), Some(FunctionType::Rect));
    }
}
