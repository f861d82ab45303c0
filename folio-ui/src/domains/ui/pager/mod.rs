pub mod config;
pub mod messages;
pub mod state;
pub mod strip;

pub use config::PagerConfig;
pub use messages::PagerMessage;
pub use state::Pager;
pub use strip::{build_controls, clamp_page, total_pages};
