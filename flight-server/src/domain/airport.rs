//! Airport code and airport reference types.

use std::fmt;

/// Error returned when parsing an invalid airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport code: {reason}")]
pub struct InvalidAirportCode {
    reason: &'static str,
}

/// A valid 3-letter IATA airport code.
///
/// Airport codes are always 3 uppercase ASCII letters. This type guarantees
/// that any `AirportCode` value is valid by construction, so route keys can
/// never collide through malformed input.
///
/// # Examples
///
/// ```
/// use flight_server::domain::AirportCode;
///
/// let ams = AirportCode::parse("AMS").unwrap();
/// assert_eq!(ams.as_str(), "AMS");
///
/// // Lowercase is rejected by the strict parser
/// assert!(AirportCode::parse("ams").is_err());
///
/// // ...but accepted by the normalizing parser
/// assert_eq!(AirportCode::parse_normalized("ams").unwrap().as_str(), "AMS");
///
/// // Wrong length is rejected
/// assert!(AirportCode::parse("AM").is_err());
/// assert!(AirportCode::parse("AMST").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct AirportCode([u8; 3]);

impl AirportCode {
    /// Parse an airport code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidAirportCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidAirportCode {
                reason: "must be exactly 3 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidAirportCode {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(AirportCode([bytes[0], bytes[1], bytes[2]]))
    }

    /// Parse an airport code, folding lowercase input to uppercase first.
    ///
    /// Query parameters arrive in whatever case the caller wrote them;
    /// codes are normalized here before any catalog lookup.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidAirportCode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the airport code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII uppercase letters
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AirportCode({})", self.as_str())
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for AirportCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// An airport reference record from the static catalog.
///
/// Loaded once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Airport {
    /// IATA code (unique within the catalog)
    pub code: AirportCode,

    /// Full airport name, e.g. "Amsterdam Airport Schiphol"
    pub name: String,

    /// Display city, e.g. "Amsterdam"
    pub city: String,
}

impl Airport {
    /// Create an airport record.
    pub fn new(code: AirportCode, name: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
            city: city.into(),
        }
    }
}
