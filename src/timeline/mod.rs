//! Event replay and frame production
//!
//! [`Replay`] holds a parsed event list. [`Replay::frames`] sizes the address
//! space once and returns a [`FrameSequence`], an iterator that applies one
//! event per step and renders the resulting snapshot.
//!
//! # Single pass
//!
//! The sequence owns the occupancy buffer and advances it exactly once per
//! event, so it cannot be restarted; build a new one from the [`Replay`] to
//! replay again. Only one frame is alive at a time unless the consumer keeps
//! them, which bounds memory to the buffer plus one canvas.

pub mod progress;

use crate::config::RenderConfig;
use crate::errors::ReplayError;
use crate::memory::{compute_bounds, Bounds, GridLayout, Occupancy};
use crate::parser::event::Event;
use crate::parser::parse::parse_events;
use crate::render::{Frame, FrameRenderer, Theme, DEFAULT_THEME};
use progress::ProgressObserver;
use std::iter::FusedIterator;
use tracing::info;

/// A parsed allocator log ready to be replayed
#[derive(Debug, Clone)]
pub struct Replay {
    events: Vec<Event>,
    config: RenderConfig,
    theme: Theme,
}

impl Replay {
    pub fn new(events: Vec<Event>) -> Self {
        Replay {
            events,
            config: RenderConfig::default(),
            theme: DEFAULT_THEME,
        }
    }

    /// Parse `text`, silently dropping malformed lines
    pub fn from_log(text: &str) -> Self {
        Self::new(parse_events(text))
    }

    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        compute_bounds(&self.events)
    }

    /// Grid layout for these events, `None` when there are none
    ///
    /// Unit counts beyond `usize` saturate; [`Replay::frames`] rejects them.
    pub fn layout(&self) -> Option<GridLayout> {
        let units = usize::try_from(self.bounds()?.units()).unwrap_or(usize::MAX);
        Some(GridLayout::new(units, &self.config))
    }

    /// Start a replay run, reporting each produced frame to `progress`
    ///
    /// An empty log yields an empty sequence: no buffer, no canvas, no
    /// progress output.
    pub fn frames<P: ProgressObserver>(
        self,
        progress: P,
    ) -> Result<FrameSequence<P>, ReplayError> {
        let total = self.events.len();

        let run = match compute_bounds(&self.events) {
            Some(bounds) => {
                let occupancy = Occupancy::new(&bounds, self.config.max_units)?;
                let layout = GridLayout::new(occupancy.len(), &self.config);
                info!(
                    events = total,
                    min_offset = bounds.min_offset,
                    units = layout.units,
                    width = layout.width,
                    height = layout.height,
                    padding = layout.padding,
                    cell_size = layout.cell_size,
                    "replay layout"
                );
                Some(Run {
                    occupancy,
                    renderer: FrameRenderer::new(layout, self.config, self.theme),
                })
            }
            None => None,
        };

        Ok(FrameSequence {
            events: self.events.into_iter(),
            run,
            progress,
            total,
            produced: 0,
        })
    }
}

/// State that lives exactly as long as one replay run
struct Run {
    occupancy: Occupancy,
    renderer: FrameRenderer,
}

/// Lazy, single-pass sequence of frames, one per event, in log order
pub struct FrameSequence<P: ProgressObserver> {
    events: std::vec::IntoIter<Event>,
    run: Option<Run>,
    progress: P,
    total: usize,
    produced: usize,
}

impl<P: ProgressObserver> FrameSequence<P> {
    pub fn total(&self) -> usize {
        self.total
    }

    /// Frames produced so far
    pub fn produced(&self) -> usize {
        self.produced
    }

    /// Canvas size shared by every frame, `None` for an empty sequence
    pub fn canvas_size(&self) -> Option<(u32, u32)> {
        self.run.as_ref().map(|run| run.renderer.canvas_size())
    }
}

impl<P: ProgressObserver> Iterator for FrameSequence<P> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        let run = self.run.as_mut()?;

        let Some(event) = self.events.next() else {
            // Release the buffer with the run
            self.run = None;
            self.progress.on_complete(self.total);
            return None;
        };

        run.occupancy.apply(&event);
        let frame = run.renderer.render(&run.occupancy, &event, self.produced);

        self.produced += 1;
        self.progress.on_frame(self.produced, self.total);
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.run.is_some() {
            self.events.len()
        } else {
            0
        };
        (remaining, Some(remaining))
    }
}

impl<P: ProgressObserver> ExactSizeIterator for FrameSequence<P> {}

impl<P: ProgressObserver> FusedIterator for FrameSequence<P> {}
