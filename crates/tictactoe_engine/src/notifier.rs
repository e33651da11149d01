//! Notification collaborator: keeps at most one live notification and
//! expires it [`NOTIFICATION_TTL`](super::NOTIFICATION_TTL) after it was created.

use super::notification::{Notification, NotificationIntent};
use chrono::Utc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info, instrument};

/// Consumes [`NotificationIntent`]s and publishes the live notification.
///
/// Holds a single expiry deadline. Showing a new notification replaces the
/// deadline, so an older expiry can never clear a newer notification.
#[derive(Debug)]
pub struct Notifier {
    intents: mpsc::UnboundedReceiver<NotificationIntent>,
    live: watch::Sender<Option<Notification>>,
}

impl Notifier {
    /// Creates a notifier reading `intents`, plus a receiver for the live notification.
    #[instrument(skip(intents))]
    pub fn new(
        intents: mpsc::UnboundedReceiver<NotificationIntent>,
    ) -> (Self, watch::Receiver<Option<Notification>>) {
        let (live, rx) = watch::channel(None);
        (Self { intents, live }, rx)
    }

    /// Spawns [`Notifier::run`] on the current tokio runtime.
    pub fn spawn(
        intents: mpsc::UnboundedReceiver<NotificationIntent>,
    ) -> (JoinHandle<()>, watch::Receiver<Option<Notification>>) {
        let (notifier, rx) = Self::new(intents);
        (tokio::spawn(notifier.run()), rx)
    }

    /// Runs until every intent sender is dropped.
    #[instrument(skip(self))]
    pub async fn run(mut self) {
        info!("Notifier started");
        let mut deadline: Option<Instant> = None;

        loop {
            let expiry = async move {
                match deadline {
                    Some(at) => sleep_until(at).await,
                    None => std::future::pending::<()>().await,
                }
            };

            tokio::select! {
                intent = self.intents.recv() => match intent {
                    Some(NotificationIntent::Show(notification)) => {
                        let remaining = notification.remaining(Utc::now());
                        debug!(
                            text = notification.text(),
                            kind = %notification.kind(),
                            remaining_ms = remaining.as_millis() as u64,
                            "Showing notification"
                        );
                        deadline = Some(Instant::now() + remaining);
                        self.live.send_replace(Some(notification));
                    }
                    Some(NotificationIntent::Clear) => {
                        debug!("Clearing notification");
                        deadline = None;
                        self.live.send_replace(None);
                    }
                    None => break,
                },
                () = expiry => {
                    debug!("Notification expired");
                    deadline = None;
                    self.live.send_replace(None);
                }
            }
        }

        info!("Notifier stopped");
    }
}
