//! NexTrip stop code type.

use std::fmt;

/// Error returned when parsing an invalid stop code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop code: {reason}")]
pub struct InvalidStopCode {
    reason: &'static str,
}

/// A valid 4-character NexTrip stop code.
///
/// Metro Transit identifies rail platforms by 4-character codes made of
/// uppercase ASCII letters and digits (e.g. `TF12`, `5SNI`, `10CE`). This
/// type guarantees that any `StopCode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use metro_skill::directory::StopCode;
///
/// let tf = StopCode::parse("TF12").unwrap();
/// assert_eq!(tf.as_str(), "TF12");
///
/// // Lowercase is rejected
/// assert!(StopCode::parse("tf12").is_err());
///
/// // Wrong length is rejected
/// assert!(StopCode::parse("TF1").is_err());
/// assert!(StopCode::parse("TF123").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StopCode([u8; 4]);

impl StopCode {
    /// Parse a stop code from a string.
    ///
    /// The input must be exactly 4 uppercase ASCII letters or digits.
    pub fn parse(s: &str) -> Result<Self, InvalidStopCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 4 {
            return Err(InvalidStopCode {
                reason: "must be exactly 4 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() && !b.is_ascii_digit() {
                return Err(InvalidStopCode {
                    reason: "must be uppercase ASCII letters or digits",
                });
            }
        }

        Ok(StopCode([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Construct a stop code from a literal known at compile time.
    ///
    /// Intended for the static station table; evaluating this in a `const`
    /// context rejects invalid codes at compile time.
    pub const fn from_static(code: &'static str) -> Self {
        let bytes = code.as_bytes();
        assert!(bytes.len() == 4, "stop code must be exactly 4 characters");

        let mut buf = [0u8; 4];
        let mut i = 0;
        while i < 4 {
            let b = bytes[i];
            assert!(
                b.is_ascii_uppercase() || b.is_ascii_digit(),
                "stop code must be uppercase ASCII letters or digits"
            );
            buf[i] = b;
            i += 1;
        }

        StopCode(buf)
    }

    /// Returns the stop code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII letters and digits
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for StopCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopCode({})", self.as_str())
    }
}

impl fmt::Display for StopCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
