mod errors;
mod export;
mod format;
mod input;
mod menu;
mod report;

pub use menu::Menu;
pub use report::{write_banner, write_overview, write_welcome};
