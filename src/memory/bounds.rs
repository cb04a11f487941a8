//! Address-space bounds of an event list

use crate::parser::event::Event;

/// Smallest offset and largest `offset + size` over an event list
///
/// Only exists once at least one event has been seen; an empty log has no
/// bounds at all rather than sentinel values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_offset: i64,
    pub max_offset: i128,
}

impl Bounds {
    fn from_event(event: &Event) -> Self {
        Bounds {
            min_offset: event.offset,
            max_offset: event.end(),
        }
    }

    fn include(self, event: &Event) -> Self {
        Bounds {
            min_offset: self.min_offset.min(event.offset),
            max_offset: self.max_offset.max(event.end()),
        }
    }

    /// `max_offset - min_offset`, or 0 when negative sizes pull the end below the start
    pub fn units(&self) -> u128 {
        let span = self.max_offset - self.min_offset as i128;
        span.max(0) as u128
    }
}

/// Compute the bounds of `events`, `None` for an empty list
pub fn compute_bounds(events: &[Event]) -> Option<Bounds> {
    let (first, rest) = events.split_first()?;
    Some(
        rest.iter()
            .fold(Bounds::from_event(first), |bounds, event| bounds.include(event)),
    )
}
