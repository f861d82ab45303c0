pub mod frames;
pub mod headless;
