mod app;
mod config;
mod effects;
mod opener;
mod ui;

pub use app::run_app;
