//! Short-lived messages shown after a game ends or the score is reset.

use super::{Outcome, Player};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How long a notification stays visible unless dismissed or replaced.
pub const NOTIFICATION_TTL: Duration = Duration::from_millis(3000);

/// Visual tone of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum NotificationKind {
    /// A player won.
    Success,
    /// A draw, or the score was cleared.
    Warning,
}

/// A message for the notification collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    text: String,
    kind: NotificationKind,
    created_at: DateTime<Utc>,
}

impl Notification {
    /// Creates a notification stamped with the current time.
    pub fn new(text: impl Into<String>, kind: NotificationKind) -> Self {
        Self::at(text, kind, Utc::now())
    }

    /// Creates a notification with an explicit creation time.
    pub fn at(text: impl Into<String>, kind: NotificationKind, created_at: DateTime<Utc>) -> Self {
        Self {
            text: text.into(),
            kind,
            created_at,
        }
    }

    /// Announces the outcome of a finished game.
    pub fn for_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Winner(player) => Self::new(winner_text(player), NotificationKind::Success),
            Outcome::Draw => Self::new("It's a draw!", NotificationKind::Warning),
        }
    }

    /// Confirms that the score was cleared.
    pub fn score_reset() -> Self {
        Self::new("Score reset!", NotificationKind::Warning)
    }

    /// Message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Visual tone.
    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    /// Time left in the display window at `now`.
    ///
    /// The window is [`NOTIFICATION_TTL`] from creation. It saturates at zero
    /// once passed, and a creation time later than `now` counts as just created.
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        let elapsed = now
            .signed_duration_since(self.created_at)
            .to_std()
            .unwrap_or(Duration::ZERO);
        NOTIFICATION_TTL.saturating_sub(elapsed)
    }
}

fn winner_text(player: Player) -> String {
    format!("Player {} wins!", player)
}

/// What the controller asks of the notification collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationIntent {
    /// Show this notification, replacing any live one.
    Show(Notification),
    /// Remove the live notification, if any.
    Clear,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_texts() {
        let win = Notification::for_outcome(Outcome::Winner(Player::O));
        assert_eq!(win.text(), "Player O wins!");
        assert_eq!(win.kind(), NotificationKind::Success);

        let draw = Notification::for_outcome(Outcome::Draw);
        assert_eq!(draw.text(), "It's a draw!");
        assert_eq!(draw.kind(), NotificationKind::Warning);
    }

    #[test]
    fn test_window_counts_down_from_creation() {
        let created = Utc::now();
        let note = Notification::at("Score reset!", NotificationKind::Warning, created);

        assert_eq!(note.remaining(created), NOTIFICATION_TTL);
        assert_eq!(
            note.remaining(created + chrono::Duration::milliseconds(1000)),
            Duration::from_millis(2000)
        );
        assert_eq!(
            note.remaining(created + chrono::Duration::milliseconds(2999)),
            Duration::from_millis(1)
        );
        assert_eq!(
            note.remaining(created + chrono::Duration::milliseconds(3000)),
            Duration::ZERO
        );
    }

    #[test]
    fn test_window_at_timestamp_extremes() {
        let now = Utc::now();

        let future = Notification::at("x", NotificationKind::Warning, DateTime::<Utc>::MAX_UTC);
        assert_eq!(future.remaining(now), NOTIFICATION_TTL);

        let ancient = Notification::at("x", NotificationKind::Warning, DateTime::<Utc>::MIN_UTC);
        assert_eq!(ancient.remaining(now), Duration::ZERO);
        assert_eq!(ancient.remaining(DateTime::<Utc>::MAX_UTC), Duration::ZERO);
    }
}
