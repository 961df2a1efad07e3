pub mod cli;
pub mod config;
pub mod core;
pub mod demo;
pub mod display;
pub mod script;
pub mod stores;
pub mod traits;
pub mod types;

pub use crate::core::GameSession;
pub use config::SessionConfig;
pub use display::HeadlessView;
pub use stores::{JsonFileStore, MemoryStore};
