//! Application state and logic.

use tictactoe_engine::{Controller, CueSink, Notification, Position};
use tokio::sync::watch;
use tracing::{debug, instrument};

use super::input::Action;

/// Whether the event loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state: the controller plus what only the screen needs.
pub struct App<C> {
    controller: Controller<C>,
    cursor: Position,
    notification: watch::Receiver<Option<Notification>>,
}

impl<C: CueSink> App<C> {
    /// Creates a new application with the cursor on the center cell.
    pub fn new(
        controller: Controller<C>,
        notification: watch::Receiver<Option<Notification>>,
    ) -> Self {
        Self {
            controller,
            cursor: Position::Center,
            notification,
        }
    }

    /// Gets the controller.
    pub fn controller(&self) -> &Controller<C> {
        &self.controller
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The notification currently on screen, if any.
    pub fn notification(&self) -> Option<Notification> {
        self.notification.borrow().clone()
    }

    /// Applies one key action.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action) -> Flow {
        match action {
            Action::Cursor(direction) => self.cursor = self.cursor.step(direction),
            Action::SelectCursor => self.select(self.cursor.to_index()),
            Action::Select(index) => {
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.select(index);
            }
            Action::NewGame => self.controller.request_new_game(),
            Action::ResetScore => self.controller.request_score_reset(),
            Action::ToggleMute => {
                self.controller.toggle_mute();
            }
            Action::Dismiss => self.controller.dismiss_notification(),
            Action::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    fn select(&mut self, index: usize) {
        // Illegal moves are expected input; the controller already logged why.
        if let Ok(Some(outcome)) = self.controller.select_cell(index) {
            debug!(%outcome, "Game finished");
        }
    }
}
