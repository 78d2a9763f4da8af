mod config;
mod state;

pub use config::{load_settings, save_settings, AppSettings};
pub use state::FileStateService;
