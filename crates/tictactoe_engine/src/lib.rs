//! Tic-tac-toe engine with score tracking and expiring notifications.
//!
//! # Architecture
//!
//! - **Rules**: pure board evaluation ([`rules::find_winning_line`], [`rules::is_full`])
//! - **Session**: one game's board, player to move, and [`GameStatus`]
//! - **Controller**: owns the session and [`Score`], turns input into
//!   transitions, and signals the collaborators
//! - **Collaborators**: a [`CueSink`] for audio and a [`Notifier`] task that
//!   expires notifications
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Controller, Outcome, Player, SilentCues};
//!
//! let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
//! let mut controller = Controller::new(SilentCues, tx);
//!
//! for index in [0, 3, 1, 4] {
//!     assert_eq!(controller.select_cell(index), Ok(None));
//! }
//! assert_eq!(controller.select_cell(2), Ok(Some(Outcome::Winner(Player::X))));
//! assert_eq!(controller.score().x(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod cue;
mod error;
pub mod invariants;
mod notification;
mod notifier;
mod position;
pub mod rules;
mod score;
mod session;
mod status;
mod types;

pub use controller::Controller;
pub use cue::{Cue, CueSink, SilentCues};
pub use error::{AudioUnavailable, IllegalMove};
pub use notification::{NOTIFICATION_TTL, Notification, NotificationIntent, NotificationKind};
pub use notifier::Notifier;
pub use position::{Direction, Position};
pub use rules::Line;
pub use score::Score;
pub use session::Session;
pub use status::{GameStatus, Outcome};
pub use types::{Board, Player, Square};
