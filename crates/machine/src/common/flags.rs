//! Status flag bitset.
//!
//! The FLAGS register is an 8-bit bitset summarizing the outcome of the last
//! arithmetic or compare operation. A strong type prevents accidental mixing
//! with ordinary byte values.

use std::fmt;

use serde::Serialize;

/// The FLAGS register: a bitset over the four defined status bits.
///
/// Undefined bits are never set; the raw value is observable through
/// [`Flags::bits`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Flags(u8);

impl Flags {
    /// Result was zero.
    pub const ZERO: u8 = 0x01;
    /// Result was negative (high bit set).
    pub const NEGATIVE: u8 = 0x02;
    /// Unsigned carry out (addition) or borrow (subtraction).
    pub const CARRY: u8 = 0x04;
    /// Signed two's-complement overflow.
    pub const OVERFLOW: u8 = 0x08;

    /// Creates an empty flag set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Returns the raw 8-bit value.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns `true` if any bit of `mask` is set.
    pub const fn contains(self, mask: u8) -> bool {
        self.0 & mask != 0
    }

    /// Sets every bit of `mask`.
    pub fn insert(&mut self, mask: u8) {
        self.0 |= mask;
    }

    /// Clears every bit of `mask`.
    pub fn remove(&mut self, mask: u8) {
        self.0 &= !mask;
    }

    /// Clears all flags.
    pub fn clear(&mut self) {
        self.0 = 0;
    }
}

impl fmt::Display for Flags {
    /// Writes the set flags by name (`ZERO, CARRY`), or `-` if none are set.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = Vec::new();
        if self.contains(Self::ZERO) {
            names.push("ZERO");
        }
        if self.contains(Self::NEGATIVE) {
            names.push("NEGATIVE");
        }
        if self.contains(Self::CARRY) {
            names.push("CARRY");
        }
        if self.contains(Self::OVERFLOW) {
            names.push("OVERFLOW");
        }
        if names.is_empty() {
            write!(f, "-")
        } else {
            write!(f, "{}", names.join(", "))
        }
    }
}
