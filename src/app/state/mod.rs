//! Application State: zentrale Datenhaltung einer Editor-Session.

mod app_state;
mod editor;
mod selection;
mod ui;

pub use app_state::{AppState, TrackInfo};
pub use editor::{DragState, EditorState};
pub use selection::SelectionState;
pub use ui::UiState;
