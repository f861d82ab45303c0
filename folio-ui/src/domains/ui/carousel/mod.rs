pub mod config;
pub mod engine;
pub mod fling;
pub mod layout;
pub mod messages;
pub mod ticker;
pub mod update;

// Re-export primary types for convenience
pub use config::CarouselConfig;
pub use engine::{CarouselEngine, CarouselPhase, DragSession, ItemClick};
pub use messages::{
    ArrowDirection, CarouselMessage, CarouselOutcome, PointerSource,
};
pub use ticker::FrameTicker;
pub use update::update;
