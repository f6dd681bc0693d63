use super::*;
use crate::app::state::DragState;
use crate::app::use_cases;
use crate::core::SegmentKind;

fn keys(pressed: &[Key], command: bool, shift: bool) -> FrameKeys {
    FrameKeys {
        pressed: pressed.to_vec(),
        modifiers: Modifiers { command, shift },
    }
}

fn state_with_selection() -> AppState {
    let mut state = AppState::new();
    use_cases::editing::add_segment(&mut state, SegmentKind::Straight);
    state
}

#[test]
fn ctrl_z_is_undo() {
    let intents = collect_keyboard_intents(&keys(&[Key::Z], true, false), &AppState::new());
    assert!(matches!(intents.as_slice(), [AppIntent::UndoRequested]));
}

#[test]
fn ctrl_y_and_ctrl_shift_z_are_redo() {
    let state = AppState::new();
    for frame in [keys(&[Key::Y], true, false), keys(&[Key::Z], true, true)] {
        let intents = collect_keyboard_intents(&frame, &state);
        assert!(matches!(intents.as_slice(), [AppIntent::RedoRequested]));
    }
}

#[test]
fn plain_z_does_nothing() {
    let intents = collect_keyboard_intents(&keys(&[Key::Z], false, false), &AppState::new());
    assert!(intents.is_empty());
}

#[test]
fn delete_and_backspace_need_a_selection() {
    let state = state_with_selection();
    for key in [Key::Delete, Key::Backspace] {
        let intents = collect_keyboard_intents(&keys(&[key], false, false), &state);
        assert!(matches!(
            intents.as_slice(),
            [AppIntent::DeleteSelectedRequested]
        ));
    }

    let intents = collect_keyboard_intents(&keys(&[Key::Delete], false, false), &AppState::new());
    assert!(intents.is_empty());
}

#[test]
fn delete_with_command_modifier_is_ignored() {
    let state = state_with_selection();
    for key in [Key::Delete, Key::Backspace] {
        let intents = collect_keyboard_intents(&keys(&[key], true, false), &state);
        assert!(intents.is_empty());
    }

    // Cmd+Z mit gehaltenem Backspace bleibt reines Undo
    let intents = collect_keyboard_intents(&keys(&[Key::Z, Key::Backspace], true, false), &state);
    assert!(matches!(intents.as_slice(), [AppIntent::UndoRequested]));
}

#[test]
fn escape_prefers_cancelling_a_drag() {
    let mut state = state_with_selection();
    let intents = collect_keyboard_intents(&keys(&[Key::Escape], false, false), &state);
    assert!(matches!(
        intents.as_slice(),
        [AppIntent::ClearSelectionRequested]
    ));

    state.editor.drag = Some(DragState {
        segment_id: state.segments[0].id.clone(),
        grab_offset: glam::Vec2::ZERO,
        origin: state.segments[0].position,
    });
    let intents = collect_keyboard_intents(&keys(&[Key::Escape], false, false), &state);
    assert!(matches!(
        intents.as_slice(),
        [AppIntent::SegmentDragCancelled]
    ));
}
