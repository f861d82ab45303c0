//! Folio UI library
//!
//! Components behind the portfolio page: the draggable bubble carousel, the
//! card pager, modal overlays, expandable cards, the media slideshow and the
//! image lightbox. Components talk to the page only through the traits in
//! `folio-contracts`, so the same code runs against real elements or the
//! headless items in [`infra::headless`].
//!
//! Notes
//! - Public items are subject to change while the components settle.
//! - The `folio` binary runs a headless session; the library is exposed for
//!   rendering layers and tests.

pub mod domains;
pub mod infra;
