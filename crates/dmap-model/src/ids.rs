#![deny(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ModelError;

/// Numeric identifier shared by the region table and the map geometry.
///
/// Topology sources carry ids as JSON numbers while the region table stores
/// them as text, sometimes zero-padded (`"05"`). Both forms resolve to the
/// same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegionId(u32);

impl RegionId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }
}

impl FromStr for RegionId {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        trimmed
            .parse::<u32>()
            .map(Self)
            .map_err(|_| ModelError::InvalidRegionId(value.to_string()))
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RegionId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl Serialize for RegionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.0)
    }
}

impl<'de> Deserialize<'de> for RegionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RegionIdVisitor;

        impl Visitor<'_> for RegionIdVisitor {
            type Value = RegionId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a region id as a number or numeric string")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<RegionId, E> {
                u32::try_from(value)
                    .map(RegionId)
                    .map_err(|_| E::custom(format!("region id {value} out of range")))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<RegionId, E> {
                u32::try_from(value)
                    .map(RegionId)
                    .map_err(|_| E::custom(format!("region id {value} out of range")))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<RegionId, E> {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(RegionIdVisitor)
    }
}
