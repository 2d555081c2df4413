use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Central configuration for array processors in the crate.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ProcessorConfig {
    /// `none_match` rejects any element divisible by this value.
    pub divisor: i32,

    /// `filter` keeps elements no further than this below the maximum.
    pub filter_window: i32,

    #[serde(default)]
    pub kind: ProcessorKind,
}

/// Supported processor implementations.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProcessorKind {
    /// Explicit index loops.
    #[default]
    Loops,
    /// Iterator adaptors.
    Iterators,
}

impl FromStr for ProcessorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "loops" | "for_loops" => Ok(ProcessorKind::Loops),
            "iterators" | "iter" => Ok(ProcessorKind::Iterators),
            _ => Err(format!(
                "Unknown processor kind: {}. Expected `loops` or `iterators`",
                s
            )),
        }
    }
}

impl ProcessorConfig {
    pub const DEFAULT_DIVISOR: i32 = 10;
    pub const DEFAULT_FILTER_WINDOW: i32 = 10;

    pub fn new(kind: ProcessorKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            divisor: Self::DEFAULT_DIVISOR,
            filter_window: Self::DEFAULT_FILTER_WINDOW,
            kind: ProcessorKind::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_str() {
        assert_eq!("Loops".parse::<ProcessorKind>(), Ok(ProcessorKind::Loops));
        assert_eq!("iter".parse::<ProcessorKind>(), Ok(ProcessorKind::Iterators));
        assert!("streams".parse::<ProcessorKind>().is_err());
    }

    #[test]
    fn test_config_deserializes_with_default_kind() {
        let cfg: ProcessorConfig =
            serde_json::from_str(r#"{"divisor": 3, "filter_window": 5}"#).unwrap();
        assert_eq!(cfg.divisor, 3);
        assert_eq!(cfg.filter_window, 5);
        assert_eq!(cfg.kind, ProcessorKind::Loops);

        let json = serde_json::to_string(&ProcessorConfig::new(ProcessorKind::Iterators)).unwrap();
        assert!(json.contains(r#""kind":"iterators""#));
    }
}
