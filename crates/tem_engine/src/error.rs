//! Error taxonomy for the battle engine.
//!
//! Configuration problems (unknown names at lookup time) and
//! programming-contract violations (effects or actions the engine does not
//! implement) are distinct failure classes. Hook control-flow signals
//! (`Unaffected`, redirects, status vetoes) are *not* errors; they live in
//! [`crate::hooks::HookOutcome`] and the status-gate results.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// No species with this name exists in the static data.
    #[error("unknown species `{0}`")]
    UnknownSpecies(String),

    /// No move with this name exists in the static data.
    #[error("unknown move `{0}`")]
    UnknownMove(String),

    /// An effect descriptor used a key the engine does not implement.
    /// This is a rule-implementation gap, never a legitimate game state.
    #[error("unimplemented effect key `{0}`")]
    UnknownEffectKey(String),

    /// The chosen action kind is not handled by turn resolution
    /// (item use, fleeing, explicit resting).
    #[error("action `{0}` is not supported by turn resolution")]
    UnsupportedAction(&'static str),

    /// A team set could not be parsed from its text form.
    #[error("malformed set text: {0}")]
    MalformedSet(String),
}
