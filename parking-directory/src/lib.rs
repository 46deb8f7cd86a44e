pub mod annotate;
pub mod columns;
pub mod config;
pub mod directory;
pub mod distance;
pub mod error;
pub mod filter;
pub mod links;
pub mod map;
pub mod search;
pub mod state;
pub mod table;
pub mod types;
mod plugins;
mod widgets;
mod windows;

pub use config::DirectoryConfig;
pub use directory::Directory;
pub use error::DirectoryError;
pub use map::DirectoryApp;
