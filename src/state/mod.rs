mod menu;
mod persistence;

pub use menu::Menu;
pub use persistence::{load_config, save_config, LunchConfig};
