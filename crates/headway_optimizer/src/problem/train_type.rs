use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const SEATS_PER_CARRIAGE: u32 = 50;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum TrainType {
    #[serde(rename = "L4")]
    Small,
    #[serde(rename = "L8")]
    Large,
}

impl TrainType {
    pub const fn carriages(self) -> u32 {
        match self {
            TrainType::Small => 4,
            TrainType::Large => 8,
        }
    }

    pub const fn capacity(self) -> u32 {
        SEATS_PER_CARRIAGE * self.carriages()
    }

    pub const fn code(self) -> &'static str {
        match self {
            TrainType::Small => "L4",
            TrainType::Large => "L8",
        }
    }
}

impl fmt::Display for TrainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity() {
        assert_eq!(TrainType::Small.capacity(), 200);
        assert_eq!(TrainType::Large.capacity(), 400);
    }

    #[test]
    fn test_serialize_code() {
        assert_eq!(
            serde_json::to_string(&TrainType::Large).unwrap(),
            "\"L8\""
        );
    }
}
