//! Game session controller: owns the session and score, turns player
//! input into transitions, and drives the audio and notification
//! collaborators.

use super::cue::{Cue, CueSink};
use super::error::IllegalMove;
use super::notification::{Notification, NotificationIntent};
use super::{Outcome, Score, Session};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// The single owner of game state for the lifetime of the process.
///
/// Every input goes through one of the `request_*`/`select_cell` methods;
/// renderers re-read [`Controller::session`] and [`Controller::score`]
/// afterwards.
#[derive(Debug)]
pub struct Controller<C> {
    session: Session,
    score: Score,
    /// Whether the current session's outcome has been counted.
    settled: bool,
    muted: bool,
    cues: C,
    notices: mpsc::UnboundedSender<NotificationIntent>,
}

impl<C: CueSink> Controller<C> {
    /// Creates a controller with a fresh session and a zero score.
    #[instrument(skip(cues, notices))]
    pub fn new(cues: C, notices: mpsc::UnboundedSender<NotificationIntent>) -> Self {
        Self {
            session: Session::new(),
            score: Score::default(),
            settled: false,
            muted: false,
            cues,
            notices,
        }
    }

    /// Current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Current score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Whether cues are suppressed.
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// The audio collaborator.
    pub fn cue_sink(&self) -> &C {
        &self.cues
    }

    /// Places the active player's mark at cell `index`.
    ///
    /// Returns the outcome when this move ends the game.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove`] and leaves all state untouched when the game
    /// is over, the index is off the board, or the square is taken.
    #[instrument(skip(self))]
    pub fn select_cell(&mut self, index: usize) -> Result<Option<Outcome>, IllegalMove> {
        let next = self.session.place(index).inspect_err(|e| {
            debug!(error = %e, "Ignoring illegal move");
        })?;

        self.session = next;
        self.cue(Cue::Move);

        let Some(outcome) = self.session.status().outcome() else {
            return Ok(None);
        };
        self.settle(outcome);
        Ok(Some(outcome))
    }

    /// Counts a terminal outcome, announces it, and plays its cue.
    ///
    /// A session is settled at most once; only a new game clears the flag.
    fn settle(&mut self, outcome: Outcome) {
        if self.settled {
            warn!(%outcome, "Outcome already counted for this session");
            return;
        }
        self.settled = true;
        self.score = self.score.record(outcome);
        info!(%outcome, score = ?self.score, "Game over");

        self.notify(NotificationIntent::Show(Notification::for_outcome(outcome)));
        self.cue(match outcome {
            Outcome::Winner(_) => Cue::Win,
            Outcome::Draw => Cue::Draw,
        });
    }

    /// Starts a new game and clears any live notification. The score is kept.
    #[instrument(skip(self))]
    pub fn request_new_game(&mut self) {
        info!("Starting new game");
        self.session = Session::new();
        self.settled = false;
        self.notify(NotificationIntent::Clear);
    }

    /// Zeroes the score and announces it.
    #[instrument(skip(self))]
    pub fn request_score_reset(&mut self) {
        info!(previous = ?self.score, "Resetting score");
        self.score = self.score.reset();
        self.notify(NotificationIntent::Show(Notification::score_reset()));
    }

    /// Flips mute and returns the new state.
    #[instrument(skip(self))]
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        debug!(muted = self.muted, "Toggled mute");
        self.muted
    }

    /// Removes the live notification early.
    #[instrument(skip(self))]
    pub fn dismiss_notification(&mut self) {
        self.notify(NotificationIntent::Clear);
    }

    fn cue(&mut self, cue: Cue) {
        if self.muted {
            return;
        }
        if let Err(e) = self.cues.play(cue) {
            warn!(%cue, error = %e, "Cue not played");
        }
    }

    fn notify(&self, intent: NotificationIntent) {
        if self.notices.send(intent).is_err() {
            warn!("Notification receiver dropped");
        }
    }
}
