//! Error types raised by the closed configuration tables.

use thiserror::Error;

use crate::upgrades::UpgradeId;

/// Failure to resolve a textual identifier against one of the closed enums.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The upgrade identifier is not part of the catalogue.
    #[error("unknown upgrade id `{0}`")]
    UnknownUpgrade(String),
    /// The zombie type is not part of the stat table.
    #[error("unknown zombie type `{0}`")]
    UnknownZombie(String),
    /// The difficulty name is not one of easy, normal or hard.
    #[error("unknown difficulty `{0}`")]
    UnknownDifficulty(String),
}

/// Failure to change an inventory level.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryError {
    /// The upgrade already sits at the evolved level.
    #[error("upgrade `{}` is already evolved", .0.key())]
    AlreadyMaxed(UpgradeId),
}
