mod commands;
mod context;
pub mod utils;

pub use commands::{configure, link, remote_head, show};
pub use context::CliContext;
