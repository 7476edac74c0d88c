//! Broadcast hub for device change notifications.
//!
//! The platform layer (or a test) posts notifications here; the live device
//! info listens and re-reads the affected field on each one.

use tokio::sync::broadcast;

/// Change notifications a platform can deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceNotification {
    ThermalStateDidChange,
}

#[derive(Debug, Clone)]
pub struct NotificationCenter {
    tx: broadcast::Sender<DeviceNotification>,
}

impl NotificationCenter {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Deliver a notification to every current subscriber.
    ///
    /// Returns the number of subscribers reached. Posting with no subscribers
    /// is not an error.
    pub fn post(&self, notification: DeviceNotification) -> usize {
        match self.tx.send(notification) {
            Ok(receivers) => {
                log::trace!("Posted {:?} to {} subscriber(s)", notification, receivers);
                receivers
            }
            Err(_) => {
                log::trace!("Posted {:?} with no subscribers", notification);
                0
            }
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DeviceNotification> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(16)
    }
}
