//! UI-Anbindung ohne Rendering: Eingaben eines Frames werden auf `AppIntent`s abgebildet.
//!
//! Die Oberfläche pollt Eingaben pro Frame aus der Session, die den State
//! besitzt; es bleiben keine Listener über das Ende einer Session hinaus bestehen.

mod keyboard;

pub use keyboard::{collect_keyboard_intents, FrameKeys, Key, Modifiers};
