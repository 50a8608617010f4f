//! Room identifier type for the wayfinding engine
//!
//! Room identity is structural: a room is named by the floor it sits on and
//! its placement sequence within that floor, rendered as `R<floor><seq>`
//! with the sequence zero-padded to two digits (`R101`, `R1127`).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Identifier for a room within a floor, e.g. `R305` (floor 3, room 05)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId {
    floor: u32,
    seq: u32,
}

impl RoomId {
    /// Create a room id from a floor number and a placement sequence
    pub fn new(floor: u32, seq: u32) -> Self {
        Self { floor, seq }
    }

    /// The floor this room belongs to
    pub fn floor(&self) -> u32 {
        self.floor
    }

    /// The placement sequence of this room within its floor (starts at 1)
    pub fn seq(&self) -> u32 {
        self.seq
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}{:02}", self.floor, self.seq)
    }
}

impl FromStr for RoomId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('R')
            .or_else(|| s.strip_prefix('r'))
            .ok_or_else(|| format!("Room id must start with 'R': {}", s))?;
        if digits.len() < 3 {
            return Err(format!(
                "Room id needs a floor digit and a 2-digit sequence: {}",
                s
            ));
        }
        // The last two digits are the sequence, everything before them the floor.
        let (floor_part, seq_part) = digits.split_at(digits.len() - 2);
        let floor =
            floor_part.parse::<u32>().map_err(|_| format!("Invalid floor in room id: {}", s))?;
        let seq =
            seq_part.parse::<u32>().map_err(|_| format!("Invalid sequence in room id: {}", s))?;
        Ok(RoomId { floor, seq })
    }
}

impl Serialize for RoomId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for RoomId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_id_display() {
        assert_eq!(RoomId::new(1, 1).to_string(), "R101");
        assert_eq!(RoomId::new(1, 12).to_string(), "R112");
        assert_eq!(RoomId::new(11, 5).to_string(), "R1105");
    }

    #[test]
    fn test_room_id_parse() {
        assert_eq!("R101".parse::<RoomId>().unwrap(), RoomId::new(1, 1));
        assert_eq!("r305".parse::<RoomId>().unwrap(), RoomId::new(3, 5));
        assert_eq!("R1127".parse::<RoomId>().unwrap(), RoomId::new(11, 27));
    }

    #[test]
    fn test_room_id_parse_rejects_malformed_input() {
        assert!("".parse::<RoomId>().is_err());
        assert!("R".parse::<RoomId>().is_err());
        assert!("R05".parse::<RoomId>().is_err()); // no floor digit
        assert!("105".parse::<RoomId>().is_err()); // missing prefix
        assert!("Rxx01".parse::<RoomId>().is_err());
        assert!("R1x1".parse::<RoomId>().is_err());
    }

    #[test]
    fn test_room_id_round_trip() {
        for id in [RoomId::new(1, 1), RoomId::new(9, 99), RoomId::new(42, 7)] {
            let parsed: RoomId = id.to_string().parse().unwrap();
            assert_eq!(parsed, id);
        }
    }

    #[test]
    fn test_room_id_serialization() {
        let id = RoomId::new(3, 5);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"R305\"");

        let back: RoomId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_room_id_ordering() {
        let mut ids = vec![RoomId::new(1, 3), RoomId::new(1, 1), RoomId::new(2, 1)];
        ids.sort();
        assert_eq!(ids, vec![RoomId::new(1, 1), RoomId::new(1, 3), RoomId::new(2, 1)]);
    }
}
