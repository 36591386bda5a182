use horde_core::UpgradeId;
use thiserror::Error;

/// Host protocol violations reported by [`crate::Simulation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// An upgrade was chosen while no offer was pending.
    #[error("no upgrade offer is pending")]
    NoOfferPending,
    /// The chosen upgrade was not part of the pending offer.
    #[error("upgrade `{}` was not offered", .0.key())]
    NotOffered(UpgradeId),
}
