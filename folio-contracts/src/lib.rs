//! Trait surfaces that describe what folio components need from the page.
//!
//! The components never touch a document directly. A rendering layer (a
//! browser binding, a terminal renderer, or the headless items used in tests)
//! implements these traits for its own element handles.

pub mod item;
pub mod pager_host;

pub use item::{CarouselItem, PageItem, Presentable};
pub use pager_host::{PagerHost, Resettable};

/// Frequently used trait combinators for UI crates.
pub mod prelude {
    pub use super::item::{CarouselItem, PageItem, Presentable};
    pub use super::pager_host::{PagerHost, Resettable};
    pub use folio_model::{
        BubbleSlot, Bounds, OverlayKey, PageControl, PresentationFlag,
        ScrollMotion,
    };
}
