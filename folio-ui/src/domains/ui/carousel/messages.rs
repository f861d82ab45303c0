use folio_model::Bounds;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowDirection {
    Previous,
    Next,
}

/// Input device behind a press. Mouse and touch drive identical transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch,
}

#[derive(Debug, Clone, Copy)]
pub enum CarouselMessage {
    /// Frame callback with its timestamp.
    Tick(Instant),
    PointerDown {
        x: f32,
        at: Instant,
        source: PointerSource,
    },
    PointerMove {
        x: f32,
        at: Instant,
    },
    PointerUp {
        at: Instant,
    },
    Arrow(ArrowDirection),
    ItemClicked(usize),
    /// The track was laid out again with new bounds.
    Resize(Bounds),
}

/// What a message did, for hosts that react to it (e.g. navigation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselOutcome {
    Idle,
    Repositioned { centered: usize },
    /// A click that ended a drag; the host should not follow the item link.
    ClickSuppressed,
    Recentered(usize),
}
