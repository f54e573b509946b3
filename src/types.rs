//! Domain identifier types shared by every endpoint module.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::serde_helpers::U64FromAny;

/// Steam application id (`appid`), e.g. `440` for Team Fortress 2.
pub type AppId = u32;

/// Lowest 64-bit id in the individual-account namespace. Real account ids
/// sit strictly above it and render as 17 decimal digits.
const STEAM_ID_BASE: u64 = 76_561_197_960_265_728;

/// Lowest 64-bit id in the group namespace.
const GROUP_ID_BASE: u64 = 103_582_791_429_521_408;

/// A 64-bit Steam account identifier.
///
/// Deserializes from either a JSON number or a decimal string, since the
/// API uses both encodings depending on the endpoint.
#[serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SteamId(#[serde_as(as = "U64FromAny")] pub u64);

impl SteamId {
    /// Whether the id lies in the individual-account namespace.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.0 > STEAM_ID_BASE
    }
}

impl fmt::Display for SteamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for SteamId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(SteamId)
    }
}

impl From<u64> for SteamId {
    fn from(id: u64) -> Self {
        SteamId(id)
    }
}

/// A 64-bit Steam group (clan) identifier.
#[serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupId(#[serde_as(as = "U64FromAny")] pub u64);

impl GroupId {
    /// Whether the id lies in the group namespace.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.0 > GROUP_ID_BASE
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for GroupId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(GroupId)
    }
}

impl From<u64> for GroupId {
    fn from(id: u64) -> Self {
        GroupId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steam_id_validity() {
        assert!(SteamId(76_561_197_961_279_983).is_valid());
        assert!(!SteamId(0).is_valid());
        assert!(!SteamId(STEAM_ID_BASE).is_valid());
    }

    #[test]
    fn group_id_validity() {
        assert!(GroupId(103_582_791_429_521_412).is_valid());
        assert!(!GroupId(0).is_valid());
    }

    #[test]
    fn steam_id_deserializes_from_string_field() {
        #[derive(Deserialize)]
        struct Payload {
            steamid: SteamId,
        }

        let p: Payload = serde_json::from_str("{\"steamid\": \"76561197961279983\"}").unwrap();
        assert_eq!(p.steamid, SteamId(76_561_197_961_279_983));
    }

    #[test]
    fn steam_id_round_trips_as_string() {
        let json = serde_json::to_string(&SteamId(76_561_197_961_279_983)).unwrap();
        assert_eq!(json, "\"76561197961279983\"");
    }
}
