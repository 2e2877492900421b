//! LS-8 Flags Register.
//!
//! The flags register (`FL`) holds the result of the last `CMP` in its low three
//! bits, laid out as `00000LGE`. Exactly one of the bits is set after a compare;
//! no other instruction touches the register.

use std::cmp::Ordering;

/// Equal flag (bit 0).
pub const FLAG_EQUAL: u8 = 0b0000_0001;

/// Greater-than flag (bit 1).
pub const FLAG_GREATER: u8 = 0b0000_0010;

/// Less-than flag (bit 2).
pub const FLAG_LESS: u8 = 0b0000_0100;

/// Condition flags produced by `CMP`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Flags(u8);

impl Flags {
    /// Flags with every bit clear, the state at reset.
    pub const CLEAR: Self = Self(0);

    /// Builds the flag state for the ordering of `dest` relative to `src`.
    pub const fn from_ordering(ord: Ordering) -> Self {
        match ord {
            Ordering::Equal => Self(FLAG_EQUAL),
            Ordering::Less => Self(FLAG_LESS),
            Ordering::Greater => Self(FLAG_GREATER),
        }
    }

    /// Returns the raw `00000LGE` byte.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns `true` if the Equal flag is set.
    #[inline]
    pub const fn equal(self) -> bool {
        self.0 & FLAG_EQUAL != 0
    }

    /// Returns `true` if the Less-than flag is set.
    #[inline]
    pub const fn less(self) -> bool {
        self.0 & FLAG_LESS != 0
    }

    /// Returns `true` if the Greater-than flag is set.
    #[inline]
    pub const fn greater(self) -> bool {
        self.0 & FLAG_GREATER != 0
    }
}
