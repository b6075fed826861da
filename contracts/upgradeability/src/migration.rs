use super::{reinitialize, UpgradeError};
use soroban_sdk::Env;

pub trait Migratable {
    /// Schema version the migration produces.
    const TARGET_VERSION: u32;

    /// Writes the state introduced by `TARGET_VERSION`. Existing keys must
    /// not be rewritten in an incompatible shape.
    fn migrate(env: &Env, from_version: u32) -> Result<(), UpgradeError>;
}

/// Advances the schema version and runs the migration in the same
/// invocation, so a failing migration leaves the old version in place.
pub fn execute_migration<T: Migratable>(env: &Env) -> Result<u32, UpgradeError> {
    let from_version = reinitialize(env, T::TARGET_VERSION)?;
    T::migrate(env, from_version)?;
    Ok(from_version)
}
