//! The input form: prompt, token count, temperature and the submit trigger.
//!
//! Uses MVI:
//! - `state.rs` - `FormState` and focus
//! - `intent.rs` - edits, submit and settle
//! - `reducer.rs` - pure transitions
//! - `view.rs` - rendering

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{FormField, FormState};
pub use view::render_form;
