use std::collections::HashMap;

/// Independently refreshed area of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Status,
    Streak,
    Summary,
    Charts,
    Weather,
}

/// Monotonic request counter per panel. A response is applied only if no
/// newer request for the same panel was issued while it was in flight.
#[derive(Debug, Default)]
pub struct RequestGenerations {
    latest: HashMap<Panel, u64>,
}

impl RequestGenerations {
    pub fn issue(&mut self, panel: Panel) -> u64 {
        let next = self.latest.get(&panel).copied().unwrap_or(0) + 1;
        self.latest.insert(panel, next);
        next
    }

    pub fn is_latest(&self, panel: Panel, generation: u64) -> bool {
        self.latest.get(&panel).copied() == Some(generation)
    }
}
