//! Startup configuration

pub mod context;

pub use context::{split_path_var, HostContext};
