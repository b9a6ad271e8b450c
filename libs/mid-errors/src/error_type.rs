//! Bitmask classification of recorded errors.
//!
//! The high bits describe where a failure came from (binding vs rendering),
//! the low bits describe who may see it (private vs public). A message can
//! carry several bits at once and filters match on any overlap.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Returned when a textual error type contains an unknown name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown error type '{name}'")]
pub struct UnknownErrorType {
    pub name: String,
}

/// Classification bitmask attached to every [`crate::ErrorMsg`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ErrorType(u64);

const NAMED: [(ErrorType, &str); 4] = [
    (ErrorType::BIND, "bind"),
    (ErrorType::RENDER, "render"),
    (ErrorType::PRIVATE, "private"),
    (ErrorType::PUBLIC, "public"),
];

impl ErrorType {
    /// Failure while binding request input.
    pub const BIND: Self = Self(1 << 63);
    /// Failure while rendering the response.
    pub const RENDER: Self = Self(1 << 62);
    /// Internal only; never shown to clients.
    pub const PRIVATE: Self = Self(1);
    /// Safe to expose to clients.
    pub const PUBLIC: Self = Self(1 << 1);
    /// Filter wildcard matching every type.
    pub const ANY: Self = Self(u64::MAX);
    pub const NONE: Self = Self(0);

    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// True when `self` and `other` share at least one bit.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// True when every bit of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for ErrorType {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ErrorType {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for ErrorType {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::ANY {
            return f.write_str("any");
        }
        if self.is_empty() {
            return f.write_str("none");
        }

        let mut rest = self.0;
        let mut first = true;
        for (flag, name) in NAMED {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                rest &= !flag.0;
                first = false;
            }
        }
        if rest != 0 {
            if !first {
                f.write_str("|")?;
            }
            write!(f, "{rest:#x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ErrorType({self})")
    }
}

impl FromStr for ErrorType {
    type Err = UnknownErrorType;

    /// Parses `|`-separated names (`bind`, `render`, `private`, `public`,
    /// `any`, `none`) or hex bit values, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut out = Self::NONE;
        for part in s.split('|').map(str::trim) {
            let lower = part.to_ascii_lowercase();
            let flag = match lower.as_str() {
                "any" => Self::ANY,
                "none" => Self::NONE,
                other => {
                    if let Some((flag, _)) = NAMED.iter().find(|(_, name)| *name == other) {
                        *flag
                    } else if let Some(hex) = other.strip_prefix("0x") {
                        u64::from_str_radix(hex, 16)
                            .map(Self)
                            .map_err(|_| UnknownErrorType {
                                name: part.to_owned(),
                            })?
                    } else {
                        return Err(UnknownErrorType {
                            name: part.to_owned(),
                        });
                    }
                }
            };
            out |= flag;
        }
        Ok(out)
    }
}

impl TryFrom<String> for ErrorType {
    type Error = UnknownErrorType;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ErrorType> for String {
    fn from(value: ErrorType) -> Self {
        value.to_string()
    }
}
