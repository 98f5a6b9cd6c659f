pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::sink::{MemorySink, WriterSink};
pub use crate::config::toml_config::DemoConfig;
pub use crate::core::{
    arithmetic::{calculate_sum, squares, try_calculate_sum},
    greeting::greet,
    repr::PyRepr,
    showcase::Showcase,
};
pub use crate::domain::model::{Person, ShowcaseInputs};
pub use crate::utils::error::{DemoError, Result};
