// Library exports for testing
pub mod config;
pub mod constants;
pub mod resizer;

pub use config::ResizeConfig;
pub use resizer::{resize_icon, resize_icons, resize_icons_to, ResizeReport, ResizedIcon};
