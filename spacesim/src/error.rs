//! Error type shared by the simulation library.

use thiserror::Error;

use crate::simulation::states::BodyId;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, SimError>;

#[derive(Debug, Error)]
pub enum SimError {
    /// A body failed validation at creation (mass, position or velocity).
    #[error("invalid body {id}: {reason}")]
    InvalidBody { id: BodyId, reason: String },

    /// Two bodies were registered under the same id.
    #[error("duplicate body id {0}")]
    DuplicateId(BodyId),

    /// Invalid scenario or engine parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// Two bodies occupy the same point; the gravity kick would be infinite.
    /// Only raised when the engine runs with the `halt` degeneracy policy.
    #[error("bodies {target} and {other} coincide at tick {tick}")]
    Coincident {
        target: BodyId,
        other: BodyId,
        tick: u64,
    },

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coincident_message_names_both_bodies() {
        let e = SimError::Coincident { target: 3, other: 4, tick: 12 };
        let msg = e.to_string();
        assert!(msg.contains('3') && msg.contains('4'));
        assert!(msg.contains("tick 12"));
    }
}
