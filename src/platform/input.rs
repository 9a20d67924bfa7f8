//! Keyboard and touch mapping

/// Actions the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Jump,
    Restart,
}

/// Map a `KeyboardEvent.code` to an action
pub fn action_for_key(code: &str) -> Option<InputAction> {
    match code {
        "Space" | "ArrowUp" | "KeyW" => Some(InputAction::Jump),
        "Enter" | "KeyR" => Some(InputAction::Restart),
        _ => None,
    }
}

/// Touch-start always means jump
pub fn action_for_touch() -> InputAction {
    InputAction::Jump
}
