use crate::domain::model::Animal;
use crate::utils::error::Result;

/// Whole-collection persistence for the registry.
pub trait Storage {
    /// Reads every stored animal. A store that was never written yields an empty list.
    fn load(&self) -> Result<Vec<Animal>>;

    /// Replaces the stored collection with `animals`.
    fn save(&self, animals: &[Animal]) -> Result<()>;
}
