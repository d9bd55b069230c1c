/// Marker for state owned by a reducer.
///
/// `Default` lets callers `mem::take` the state out of its owner while the
/// reducer runs.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
