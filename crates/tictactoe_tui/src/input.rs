//! Key bindings.

use crossterm::event::KeyCode;
use tictactoe_engine::Direction;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor one cell.
    Cursor(Direction),
    /// Play the cell under the cursor.
    SelectCursor,
    /// Play a cell by index (0-8).
    Select(usize),
    /// Start a new game.
    NewGame,
    /// Zero the score.
    ResetScore,
    /// Toggle sound cues.
    ToggleMute,
    /// Hide the notification.
    Dismiss,
    /// Leave the program.
    Quit,
}

/// Maps a key to an action, if it is bound.
pub fn action_for(key: KeyCode) -> Option<Action> {
    let action = match key {
        KeyCode::Up => Action::Cursor(Direction::Up),
        KeyCode::Down => Action::Cursor(Direction::Down),
        KeyCode::Left => Action::Cursor(Direction::Left),
        KeyCode::Right => Action::Cursor(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Action::SelectCursor,
        // Digits are 1-based on screen.
        KeyCode::Char(c @ '1'..='9') => Action::Select(c as usize - '1' as usize),
        KeyCode::Char('n') => Action::NewGame,
        KeyCode::Char('r') => Action::ResetScore,
        KeyCode::Char('m') => Action::ToggleMute,
        KeyCode::Esc | KeyCode::Char('d') => Action::Dismiss,
        KeyCode::Char('q') => Action::Quit,
        _ => return None,
    };
    Some(action)
}
