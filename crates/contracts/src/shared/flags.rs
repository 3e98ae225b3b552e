//! 64-bit flag sets (visitor info, accessibility)
//!
//! The API sends flag sets as decimal strings because the values exceed the
//! safe integer range of JSON numbers.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::ContractError;

/// Number of usable bits
pub const FLAG_BITS: u32 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FlagSet(pub u64);

impl FlagSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Whether `bit` is set; bits outside `0..64` are never set
    pub fn is_set(&self, bit: u32) -> bool {
        if bit >= FLAG_BITS {
            return false;
        }
        self.0 & (1u64 << bit) != 0
    }

    /// Set or clear `bit`; bits outside `0..64` are ignored
    pub fn set(&mut self, bit: u32, on: bool) {
        if bit >= FLAG_BITS {
            return;
        }
        if on {
            self.0 |= 1u64 << bit;
        } else {
            self.0 &= !(1u64 << bit);
        }
    }

    /// Combine a `bit -> enabled` map into a flag set
    pub fn from_flags(flags: &BTreeMap<u32, bool>) -> Self {
        let mut set = Self::empty();
        for (bit, on) in flags {
            if *on {
                set.set(*bit, true);
            }
        }
        set
    }

    /// Indices of all set bits, ascending
    pub fn bits(&self) -> Vec<u32> {
        (0..FLAG_BITS).filter(|b| self.is_set(*b)).collect()
    }

    /// Strict parse of the decimal wire form
    pub fn parse(s: &str) -> Result<Self, ContractError> {
        s.trim()
            .parse::<u64>()
            .map(FlagSet)
            .map_err(|e| ContractError::InvalidFlags {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }

    /// Parse the wire form; empty or missing is 0, invalid input is 0 and logged
    pub fn parse_lenient(s: Option<&str>) -> Self {
        match s {
            None => Self::empty(),
            Some(raw) if raw.is_empty() => Self::empty(),
            Some(raw) => Self::parse(raw).unwrap_or_else(|e| {
                log::warn!("{}", e);
                Self::empty()
            }),
        }
    }

    pub fn to_wire_string(&self) -> String {
        self.0.to_string()
    }
}

impl Serialize for FlagSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_wire_string())
    }
}

impl<'de> Deserialize<'de> for FlagSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        FlagSet::parse(&raw).map_err(serde::de::Error::custom)
    }
}
