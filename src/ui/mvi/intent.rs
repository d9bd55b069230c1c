/// Marker for anything a reducer consumes: key presses, settled service
/// calls, timer ticks.
pub trait Intent: Send + 'static {}
