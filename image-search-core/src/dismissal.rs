//! Process-wide "close the preview" signal.
//!
//! Any part of the application may [`raise`](DismissalSignal::raise) the
//! signal (the TUI does so on `Esc`). Every active
//! [`SearchSession`](crate::services::SearchSession) holds a
//! [`DismissalSubscription`] and clears its selection the next time it pumps.
//! Subscriptions are released when dropped.

use std::sync::OnceLock;

use tokio::sync::broadcast::{self, error::TryRecvError};

/// Buffered signals per subscriber before older ones are reported as lagged.
const SIGNAL_CAPACITY: usize = 16;

/// Broadcast channel for overlay dismissal.
#[derive(Debug, Clone)]
pub struct DismissalSignal {
    sender: broadcast::Sender<()>,
}

impl Default for DismissalSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl DismissalSignal {
    /// Create an independent signal.
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(SIGNAL_CAPACITY);
        Self { sender }
    }

    /// The shared process-wide signal.
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<DismissalSignal> = OnceLock::new();
        GLOBAL.get_or_init(Self::new)
    }

    /// Notify every current subscriber. Returns how many received it.
    pub fn raise(&self) -> usize {
        // send only fails when nobody is subscribed
        let delivered = self.sender.send(()).unwrap_or(0);
        log::debug!("Dismissal signal raised, {delivered} subscriber(s)");
        delivered
    }

    /// Register a new subscriber.
    pub fn subscribe(&self) -> DismissalSubscription {
        DismissalSubscription {
            receiver: self.sender.subscribe(),
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

/// A scoped registration on a [`DismissalSignal`].
#[derive(Debug)]
pub struct DismissalSubscription {
    receiver: broadcast::Receiver<()>,
}

impl DismissalSubscription {
    /// Consume every pending signal without waiting. Returns the number drained.
    pub fn drain(&mut self) -> usize {
        let mut count = 0;
        loop {
            match self.receiver.try_recv() {
                Ok(()) => count += 1,
                Err(TryRecvError::Lagged(skipped)) => {
                    count += usize::try_from(skipped).unwrap_or(usize::MAX);
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
        count
    }
}
