use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One controllable linear motion axis of the machine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
            Axis::Z => write!(f, "Z"),
        }
    }
}

impl FromStr for Axis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "X" => Ok(Axis::X),
            "Y" => Ok(Axis::Y),
            "Z" => Ok(Axis::Z),
            other => Err(format!("Unknown axis: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_bare_letter() {
        assert_eq!(serde_json::to_string(&Axis::X).unwrap(), "\"X\"");
        assert_eq!(serde_json::to_string(&Axis::Z).unwrap(), "\"Z\"");
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("x".parse::<Axis>().unwrap(), Axis::X);
        assert_eq!(" Y ".parse::<Axis>().unwrap(), Axis::Y);
        assert!("w".parse::<Axis>().is_err());
    }
}
