//! Route key type.

use std::fmt;

use super::AirportCode;

/// A directed origin/destination pair used to group flight offers.
///
/// Stored as an explicit tuple of validated codes rather than a
/// `"FROM-TO"` string, so the key can never collide on separator
/// choice. The hyphenated form only exists at the display boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteKey {
    pub from: AirportCode,
    pub to: AirportCode,
}

impl RouteKey {
    /// Create a route key from origin and destination codes.
    pub fn new(from: AirportCode, to: AirportCode) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    #[test]
    fn display_is_hyphenated() {
        let key = RouteKey::new(code("AMS"), code("TQO"));
        assert_eq!(key.to_string(), "AMS-TQO");
    }

    #[test]
    fn direction_matters() {
        let outbound = RouteKey::new(code("AMS"), code("TQO"));
        let inbound = RouteKey::new(code("TQO"), code("AMS"));
        assert_ne!(outbound, inbound);
    }

    #[test]
    fn equality_and_hash() {
        use std::collections::HashMap;
        let mut map = HashMap::new();
        map.insert(RouteKey::new(code("AMS"), code("TQO")), 1);
        assert_eq!(
            map.get(&RouteKey::new(code("AMS"), code("TQO"))),
            Some(&1)
        );
        assert_eq!(map.get(&RouteKey::new(code("WAW"), code("TQO"))), None);
    }
}
