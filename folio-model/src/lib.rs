//! Presentation data shared across folio crates.
//!
//! Nothing here knows how a page is rendered. The types describe what the
//! components decide (positions, flags, control strips) so a rendering layer
//! can apply them.
#![allow(missing_docs)]

pub mod controls;
pub mod geometry;
pub mod overlay;
pub mod presentation;

pub use controls::PageControl;
pub use geometry::Bounds;
pub use overlay::OverlayKey;
pub use presentation::{BubbleSlot, PresentationFlag, ScrollMotion};
