use serde::Serialize;

/// A change in the number of people on a platform at a given minute.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct TimedDelta {
    pub minute: i32,
    pub delta: i64,
}

/// Deltas kept sorted by minute. Deltas sharing a minute keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Timeline {
    deltas: Vec<TimedDelta>,
}

impl Timeline {
    pub fn with_capacity(capacity: usize) -> Self {
        Timeline {
            deltas: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, minute: i32, delta: i64) {
        let position = self.deltas.partition_point(|existing| existing.minute <= minute);
        self.deltas.insert(position, TimedDelta { minute, delta });
    }

    /// Sum of every delta recorded at or before `minute`.
    pub fn total_until(&self, minute: i32) -> i64 {
        self.deltas
            .iter()
            .take_while(|delta| delta.minute <= minute)
            .map(|delta| delta.delta)
            .sum()
    }

    pub fn deltas(&self) -> &[TimedDelta] {
        &self.deltas
    }

    pub fn total(&self) -> i64 {
        self.deltas.iter().map(|delta| delta.delta).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }
}
