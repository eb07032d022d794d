// src/infrastructure/mod.rs
pub mod config;
pub mod http;
pub mod renderer;
pub mod store;

pub use config::Config;
pub use http::HttpNoteService;
pub use renderer::ContentRenderer;
pub use store::FileStore;
