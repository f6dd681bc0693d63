//! Use-Case-Funktionen für Selektion und Drag.

mod drag;
mod pick;

pub use drag::{begin_drag, cancel_drag, end_drag, update_drag};
pub use pick::{clear_selection, select_segment};
