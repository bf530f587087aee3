use std::{
    fmt,
    ops::{Index, IndexMut},
    str::FromStr,
};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const BOARDING_STATIONS: usize = 3;

/// Stops of the line in travel order. `U` is the terminus, passengers only get off there.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub enum Station {
    A,
    B,
    C,
    U,
}

impl Station {
    pub const BOARDING: [Station; BOARDING_STATIONS] = [Station::A, Station::B, Station::C];

    pub const fn index(self) -> usize {
        match self {
            Station::A => 0,
            Station::B => 1,
            Station::C => 2,
            Station::U => 3,
        }
    }

    pub const fn is_terminus(self) -> bool {
        matches!(self, Station::U)
    }

    pub const fn next(self) -> Option<Station> {
        match self {
            Station::A => Some(Station::B),
            Station::B => Some(Station::C),
            Station::C => Some(Station::U),
            Station::U => None,
        }
    }

    /// Minutes spent travelling from this station to the next one, boarding delay excluded.
    pub const fn transit_to_next(self) -> i32 {
        match self {
            Station::A => 8,
            Station::B => 9,
            Station::C => 11,
            Station::U => 0,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Station::A => "A",
            Station::B => "B",
            Station::C => "C",
            Station::U => "U",
        }
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown station `{0}`")]
pub struct UnknownStationError(pub String);

impl FromStr for Station {
    type Err = UnknownStationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(Station::A),
            "B" | "b" => Ok(Station::B),
            "C" | "c" => Ok(Station::C),
            "U" | "u" => Ok(Station::U),
            other => Err(UnknownStationError(other.to_owned())),
        }
    }
}

/// One value per boarding station, indexed by [`Station`].
///
/// Indexing with [`Station::U`] panics: the terminus has no platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PerStation<T>([T; BOARDING_STATIONS]);

impl<T> PerStation<T> {
    pub const fn new(values: [T; BOARDING_STATIONS]) -> Self {
        PerStation(values)
    }

    pub fn from_fn(mut f: impl FnMut(Station) -> T) -> Self {
        PerStation(std::array::from_fn(|index| f(Station::BOARDING[index])))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Station, &T)> {
        Station::BOARDING.into_iter().zip(self.0.iter())
    }
}

impl<T> Index<Station> for PerStation<T> {
    type Output = T;

    fn index(&self, station: Station) -> &Self::Output {
        &self.0[station.index()]
    }
}

impl<T> IndexMut<Station> for PerStation<T> {
    fn index_mut(&mut self, station: Station) -> &mut Self::Output {
        &mut self.0[station.index()]
    }
}
