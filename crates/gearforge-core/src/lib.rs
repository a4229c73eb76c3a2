// GearForge Core Library
// Re-export all modules for external use

pub mod app;
pub mod config;
pub mod constants;
pub mod gear;
pub mod platform;
pub mod render;
pub mod shell;
pub mod ui;

// Re-export GearForgeApp from app module
pub use app::GearForgeApp;
