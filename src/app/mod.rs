//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
/// Application State
///
/// Dieses Modul verwaltet den Zustand einer Editor-Session (Segmente, History, Selektion).
pub mod state;
pub mod use_cases;

pub use command_log::{CommandLog, CommandLogEntry};
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use history::{EditHistory, HistorySnapshot};
pub use state::{AppState, DragState, EditorState, SelectionState, TrackInfo, UiState};
