pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{MemoryOutput, StdoutOutput};
pub use crate::core::greeter::{format_greeting, world, Greeter, GREETING_PREFIX};
pub use crate::domain::model::{Success, Value};
pub use crate::domain::ports::Output;
pub use crate::utils::error::{GreeterError, Result};
