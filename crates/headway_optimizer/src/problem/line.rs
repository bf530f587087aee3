//! Operating rules of the line.

/// Minutes between a train reaching a platform and its passengers being counted as boarded.
pub const BOARDING_DELAY: i32 = 3;

/// Minimum gap between two consecutive departures from A.
pub const MINIMUM_HEADWAY: i32 = 3;

/// Last minute, counted from the reference start, at which a train may leave A.
pub const PLANNING_HORIZON: i32 = 3 * 60;

/// Number of trains in a timetable.
pub const DEPARTURE_COUNT: usize = 16;
