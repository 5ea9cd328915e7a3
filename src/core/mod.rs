pub mod registry;
pub mod shell;

pub use crate::domain::model::{Animal, Species};
pub use crate::domain::ports::Storage;
pub use crate::utils::error::Result;
