//! ScaleHeight signup core.
//!
//! Everything the signup wizard needs that does not depend on a UI host: field
//! validation, the locally persisted draft, the configuration, the client for
//! the remote signup endpoint and the view-model driving the two steps.

pub mod client;
pub mod config;
pub mod dir;
pub mod draft;
pub mod flow;
pub mod signup;
pub mod validation;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

pub const VERSION: Version = Version {
    major: 0,
    minor: 1,
    patch: 0,
};

#[cfg(test)]
mod tests {
    #[test]
    fn version_display() {
        assert_eq!(super::VERSION.to_string(), "0.1.0");
    }
}
