pub mod app;
pub mod client;
pub mod config;
pub mod controller;
pub mod digits;
pub mod errors;
pub mod format;
pub mod handlers;
pub mod models;
pub mod render;
pub mod session;
pub mod state;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
