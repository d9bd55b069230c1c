use super::intent::Intent;
use super::state::UiState;

/// The only place where state transitions happen.
///
/// `reduce` takes the old state by value and returns the next one. It must
/// not perform I/O; side effects (spawning the service call) belong to the
/// caller.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
