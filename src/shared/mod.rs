//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Optionen und die Track-Ansicht, die zwischen `app` und der
//! Präsentationsschicht geteilt werden.

pub mod options;
mod track_view;

pub use options::EditorOptions;
pub use track_view::TrackView;
