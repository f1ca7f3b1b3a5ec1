//! Itemize core: pure state machine and view-model helpers.
mod effect;
mod item;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use item::{ExtractedItem, FieldValue, ItemField};
pub use msg::Msg;
pub use state::{AppState, RequestId};
pub use update::update;
pub use view_model::{AppViewModel, FieldSlot, ItemRowView, ResultsView, MISSING_FIELD};
