pub mod bootstrap;
pub mod loader;

pub use bootstrap::{
    bootstrap, inject_bootstrap, render_bootstrap, LoaderBootstrap, TagCommand, LOADER_BASE_URL,
};
pub use loader::{DocumentTagLoader, RecordingLoader, TagLoader};
