//! Battle errors

use thiserror::Error;

use crate::types::Side;

/// Errors raised at the action boundary, before the turn engine runs.
///
/// A name that fails to resolve *inside* the engine is a programming
/// error and panics instead; see the `# Panics` sections on the engine
/// entry points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    #[error("{side}: \"{action}\" is not a legal action in this position")]
    InvalidAction { side: Side, action: String },

    #[error("{side} must wait for the opponent's replacement")]
    WaitRequired { side: Side },

    #[error("{side} must act this turn")]
    ActionRequired { side: Side },
}
