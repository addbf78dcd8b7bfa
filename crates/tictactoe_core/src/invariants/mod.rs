//! First-class invariants.
//!
//! Invariants are logical properties that must hold throughout game
//! execution. They are testable independently and double as
//! documentation of the engine's guarantees.

use tracing::warn;

pub mod alternating;
pub mod history;
pub mod monotonic;

pub use alternating::AlternatingTurns;
pub use history::ConsistentHistory;
pub use monotonic::MonotonicBoard;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples so invariants compose into one verification
/// step.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if all hold, or the list of violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            warn!(invariant = I1::description(), "invariant violated");
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            warn!(invariant = I2::description(), "invariant violated");
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            warn!(invariant = I1::description(), "invariant violated");
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            warn!(invariant = I2::description(), "invariant violated");
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            warn!(invariant = I3::description(), "invariant violated");
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All game invariants as a composable set.
pub type GameInvariants = (MonotonicBoard, AlternatingTurns, ConsistentHistory);
