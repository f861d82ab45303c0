//! Page components.
//!
//! Each component is an explicit instance built from its configuration and
//! the items it manages, so a page can hold several independent carousels
//! or pagers.

pub mod cards;
pub mod carousel;
pub mod lightbox;
pub mod overlays;
pub mod pager;
pub mod shell;
pub mod slideshow;

pub use cards::{CardDeck, ReadMoreLabel};
pub use carousel::{CarouselConfig, CarouselEngine, CarouselMessage, CarouselOutcome};
pub use lightbox::{Lightbox, LightboxImage, ShareLinks};
pub use overlays::OverlayRegistry;
pub use pager::{Pager, PagerConfig, PagerMessage};
pub use shell::{OverlayPager, Shell, ShellMessage};
pub use slideshow::Slideshow;
