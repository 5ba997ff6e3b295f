// SPDX-License-Identifier: MIT

//! Opaque, validated identifiers for services, endpoints, and agents.
//!
//! Entity names are printable identifiers with no embedded whitespace or
//! slashes — both because they're used verbatim as znode path segments and
//! because the service-membership string is whitespace-tokenized.

use std::fmt;
use thiserror::Error;

/// A name failed validation as a store path segment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentError {
    #[error("identifier is empty")]
    Empty,
    #[error("identifier {0:?} contains whitespace")]
    Whitespace(String),
    #[error("identifier {0:?} contains a path separator")]
    Slash(String),
}

fn validate(s: &str) -> Result<(), IdentError> {
    if s.is_empty() {
        return Err(IdentError::Empty);
    }
    if s.chars().any(char::is_whitespace) {
        return Err(IdentError::Whitespace(s.to_string()));
    }
    if s.contains('/') {
        return Err(IdentError::Slash(s.to_string()));
    }
    Ok(())
}

/// Defines a validated newtype wrapper around a path-segment identifier.
macro_rules! define_ident {
    ($(#[$meta:meta])* pub struct $name:ident;) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            /// Validate and wrap `s` as an identifier.
            pub fn new(s: impl Into<String>) -> Result<Self, IdentError> {
                let s = s.into();
                validate(&s)?;
                Ok(Self(s))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdentError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::new(s)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = IdentError;

            fn try_from(s: &str) -> Result<Self, Self::Error> {
                Self::new(s)
            }
        }
    };
}

define_ident! {
    /// The name of a configured service, e.g. `"svc1"`.
    pub struct ServiceName;
}

define_ident! {
    /// An endpoint identifier within a service — in practice a hostname or
    /// IP address that is dialed over TCP.
    pub struct EndpointId;
}

define_ident! {
    /// The identity an agent or master uses for its ephemeral nodes.
    /// Defaults to the system hostname when not given on the command line.
    pub struct AgentName;
}

#[cfg(test)]
#[path = "ident_tests.rs"]
mod tests;
