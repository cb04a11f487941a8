//! Per-unit occupancy counters
//!
//! Every unit of the address range carries a running sum: `+1` for each
//! allocation covering it, `-1` for each free. The sum is never clamped, so a
//! double free shows up as `-1` and an overlapping allocation as `2`.
//!
//! # Out-of-range events
//!
//! Bounds are derived from the same events that are applied, so for
//! well-formed logs every range fits. Negative sizes produce inverted or
//! partial ranges; those are clamped to the buffer, touching nothing outside
//! it, and a warning is logged.

use super::bounds::Bounds;
use crate::errors::ReplayError;
use crate::parser::event::Event;
use std::ops::Range;
use tracing::warn;

/// Display state of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitState {
    Free,
    Used,
    /// Double free, overlapping allocation, or free without allocation
    Invalid,
    /// Cell beyond the address range
    Padding,
}

impl UnitState {
    pub fn classify(count: i32) -> Self {
        match count {
            0 => UnitState::Free,
            1 => UnitState::Used,
            _ => UnitState::Invalid,
        }
    }
}

/// Occupancy buffer for one replay run
#[derive(Debug, Clone)]
pub struct Occupancy {
    origin: i64,
    counts: Vec<i32>,
}

impl Occupancy {
    /// Zeroed buffer spanning `bounds`, refusing ranges larger than `max_units`
    pub fn new(bounds: &Bounds, max_units: u64) -> Result<Self, ReplayError> {
        let units = bounds.units();
        if units > max_units as u128 || usize::try_from(units).is_err() {
            return Err(ReplayError::AddressSpaceTooLarge {
                units,
                limit: max_units,
            });
        }
        Ok(Self::with_len(bounds.min_offset, units as usize))
    }

    /// Zeroed buffer of `len` units whose first unit is at `origin`
    pub fn with_len(origin: i64, len: usize) -> Self {
        Occupancy {
            origin,
            counts: vec![0; len],
        }
    }

    pub fn origin(&self) -> i64 {
        self.origin
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn counts(&self) -> &[i32] {
        &self.counts
    }

    /// Raw counter for unit `index`
    pub fn count(&self, index: usize) -> Option<i32> {
        self.counts.get(index).copied()
    }

    pub fn state(&self, index: usize) -> UnitState {
        self.count(index)
            .map_or(UnitState::Padding, UnitState::classify)
    }

    /// Add the event's delta to every unit it covers, returning the indices touched
    pub fn apply(&mut self, event: &Event) -> Range<usize> {
        let range = self.unit_range(event);
        let delta = event.mode.delta();
        for count in &mut self.counts[range.clone()] {
            *count += delta;
        }
        range
    }

    /// Buffer indices covered by `event`, clamped to the buffer
    fn unit_range(&self, event: &Event) -> Range<usize> {
        let len = self.counts.len() as i128;
        let start = event.offset as i128 - self.origin as i128;
        let end = event.end() - self.origin as i128;

        let clamped_start = start.clamp(0, len);
        let clamped_end = end.clamp(clamped_start, len);

        if (clamped_start, clamped_end) != (start, end) && start != end {
            warn!(
                event = %event,
                start = %start,
                end = %end,
                len = self.counts.len(),
                "event range outside the address range, clamped"
            );
        }

        clamped_start as usize..clamped_end as usize
    }

    /// Units whose counter is exactly zero
    pub fn free_units(&self) -> usize {
        self.counts.iter().filter(|&&c| c == 0).count()
    }

    /// Fraction of units that are free; an empty range counts as fully free
    pub fn free_fraction(&self) -> f64 {
        if self.counts.is_empty() {
            return 1.0;
        }
        self.free_units() as f64 / self.counts.len() as f64
    }
}
