pub mod registry;

pub use registry::OverlayRegistry;
