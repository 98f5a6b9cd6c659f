pub mod arithmetic;
pub mod greeting;
pub mod repr;
pub mod showcase;

pub use crate::domain::model::{Person, ShowcaseInputs};
pub use crate::domain::ports::OutputSink;
pub use crate::utils::error::Result;
