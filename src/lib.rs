pub use crate::config::{Config, ConfigBuilder};
pub use crate::engine::{assert, assert_bytes, Outcome, UpdateMode, UPDATE_ENV_VAR};
pub use crate::errors::SnapError;
pub use crate::render::{DebugRender, JsonRender, Render};

pub mod config;
pub mod diff;
pub mod engine;
pub mod errors;
pub mod render;
pub mod report;
pub mod store;
