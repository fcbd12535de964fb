//! Port name type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid port name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid port name: {reason}")]
pub struct InvalidPort {
    reason: &'static str,
}

/// A named port.
///
/// Port names are non-empty, carry no leading or trailing whitespace and
/// contain no control characters. Two ports are the same port exactly when
/// their names are equal.
///
/// # Examples
///
/// ```
/// use voyage_planner::domain::Port;
///
/// let liverpool = Port::parse("Liverpool").unwrap();
/// assert_eq!(liverpool.name(), "Liverpool");
///
/// // Empty names are rejected
/// assert!(Port::parse("").is_err());
///
/// // Padded names are rejected rather than trimmed
/// assert!(Port::parse(" Liverpool").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Port(String);

impl Port {
    /// Parse a port from its name.
    pub fn parse(name: &str) -> Result<Self, InvalidPort> {
        if name.is_empty() {
            return Err(InvalidPort {
                reason: "must not be empty",
            });
        }

        if name.trim() != name {
            return Err(InvalidPort {
                reason: "must not have leading or trailing whitespace",
            });
        }

        if name.chars().any(char::is_control) {
            return Err(InvalidPort {
                reason: "must not contain control characters",
            });
        }

        Ok(Port(name.to_string()))
    }

    /// Returns the port name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Port {
    type Error = InvalidPort;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Port::parse(&name)
    }
}

impl From<Port> for String {
    fn from(port: Port) -> Self {
        port.0
    }
}

impl fmt::Debug for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Port({})", self.0)
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
