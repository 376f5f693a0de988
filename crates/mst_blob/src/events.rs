//! Event types and sinks for observing blob generation.
//!
//! This module defines [`BlobEvent`] and a small set of sinks to emit or collect
//! events while running [`crate::pipeline::BlobGenerator`] or
//! [`crate::pipeline::generate_blob_with_events`].
use crate::config::BlobConfig;

/// Discriminant of [`BlobEvent`], used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlobEventKind {
    RunStarted,
    PointsSampled,
    EdgesEnumerated,
    TreeBuilt,
    RasterFinished,
    RunFinished,
    Warning,
}

/// Describes events emitted by the pipeline stages.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum BlobEvent {
    /// Emitted after validation, before sampling.
    RunStarted {
        /// The configuration used.
        config: BlobConfig,
    },

    /// Emitted when the point sampler finished.
    PointsSampled {
        /// Number of accepted points.
        count: usize,
        /// Number of candidates drawn.
        attempts: usize,
    },

    /// Emitted once all candidate edges are enumerated and sorted.
    EdgesEnumerated {
        /// Number of candidate edges.
        count: usize,
    },

    /// Emitted when the spanning tree is complete.
    TreeBuilt {
        /// Number of accepted edges.
        edges: usize,
        /// Sum of squared edge lengths.
        total_weight: f64,
    },

    /// Emitted when every pixel has been rendered.
    RasterFinished {
        /// Output width and height in pixels.
        resolution: u32,
        /// Pixels at the foreground level.
        foreground: usize,
    },

    /// Emitted at the very end of a run.
    RunFinished {
        points: usize,
        tree_edges: usize,
    },

    /// Non-fatal condition worth reporting, such as a degenerate point set.
    Warning {
        /// Stage the warning originates from.
        context: String,
        /// Human-readable message.
        message: String,
    },
}

impl BlobEvent {
    pub fn kind(&self) -> BlobEventKind {
        match self {
            BlobEvent::RunStarted { .. } => BlobEventKind::RunStarted,
            BlobEvent::PointsSampled { .. } => BlobEventKind::PointsSampled,
            BlobEvent::EdgesEnumerated { .. } => BlobEventKind::EdgesEnumerated,
            BlobEvent::TreeBuilt { .. } => BlobEventKind::TreeBuilt,
            BlobEvent::RasterFinished { .. } => BlobEventKind::RasterFinished,
            BlobEvent::RunFinished { .. } => BlobEventKind::RunFinished,
            BlobEvent::Warning { .. } => BlobEventKind::Warning,
        }
    }
}

/// A generic event sink that accepts [`BlobEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: BlobEvent);

    /// Lets the pipeline skip building events nobody listens to.
    #[inline]
    fn wants(&self, _kind: BlobEventKind) -> bool {
        true
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: BlobEvent) {}

    #[inline]
    fn wants(&self, _kind: BlobEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(BlobEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(BlobEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(BlobEvent),
{
    #[inline]
    fn send(&mut self, event: BlobEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<BlobEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn as_slice(&self) -> &[BlobEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Kinds of the collected events, in emission order.
    pub fn kinds(&self) -> Vec<BlobEventKind> {
        self.events.iter().map(BlobEvent::kind).collect()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: BlobEvent) {
        self.events.push(event);
    }
}
