//! Typed failures surfaced by [`solve`](crate::resolver::solve).

use miette::Diagnostic;
use thiserror::Error;

use crate::provider::ProviderError;

/// Terminal resolution failures. The resolver performs no internal retries;
/// every conflict is either resolved by backjumping or surfaced here.
#[derive(Debug, Error, Diagnostic)]
pub enum SolveError {
    /// A direct dependency of the root has no satisfiable version at all.
    #[error("no versions satisfy root dependency: {dependency}")]
    #[diagnostic(help("no published version of this package meets the declared constraints"))]
    NoVersionsForRoot { dependency: String },

    /// Every backjump target has been retried; the search space is empty.
    #[error("exhausted all alternatives resolving: {dependency}")]
    Exhausted { dependency: String },

    /// Two activations of the same package disagree on the version. This is
    /// an internal sanity check and indicates a resolver bug.
    #[error("conflicting versions activated for {name}: {first} and {second}")]
    ConflictingActivations {
        name: String,
        first: String,
        second: String,
    },

    /// The iteration cap was reached before a terminal state.
    #[error("iteration limit of {limit} reached before a solution was found")]
    IterationCap { limit: usize },

    /// The package repository failed; not retried.
    #[error("package repository failure: {0}")]
    Provider(#[from] ProviderError),
}
