//! Thermal-state subscription.
//!
//! A dedicated thread drives a current-thread Tokio runtime that listens on
//! the notification center and republishes the platform's thermal state into
//! a `watch` channel. The subscription is registered before `start` returns
//! and unregistered when it is dropped.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tokio::sync::broadcast::{self, error::RecvError};
use tokio::sync::watch;

use super::notifications::{DeviceNotification, NotificationCenter};
use super::types::ThermalState;
use crate::error::{DeviceError, Result};
use crate::platform::thermal::thermal_notifier_task;
use crate::platform::DevicePlatform;

pub(crate) struct ThermalSubscription {
    shutdown_tx: broadcast::Sender<()>,
    worker: Option<thread::JoinHandle<()>>,
}

impl ThermalSubscription {
    /// Register with `center` and start republishing into `publisher`.
    ///
    /// With `poll_interval` set, a notifier on the same runtime also polls
    /// the platform and posts to `center` on every change.
    pub(crate) fn start(
        platform: Arc<dyn DevicePlatform>,
        center: &NotificationCenter,
        publisher: watch::Sender<ThermalState>,
        poll_interval: Option<Duration>,
    ) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .map_err(|e| DeviceError::runtime(format!("failed to build thermal runtime: {}", e)))?;

        let (shutdown_tx, _) = broadcast::channel::<()>(1);
        let notifications = center.subscribe();
        let listener_shutdown = shutdown_tx.subscribe();
        let notifier = poll_interval.map(|period| {
            (
                period,
                center.clone(),
                *publisher.borrow(),
                shutdown_tx.subscribe(),
            )
        });

        let worker = thread::Builder::new()
            .name("device-thermal".to_string())
            .spawn(move || {
                runtime.block_on(async move {
                    if let Some((period, center, last_seen, shutdown)) = notifier {
                        tokio::spawn(thermal_notifier_task(
                            platform.clone(),
                            center,
                            period,
                            last_seen,
                            shutdown,
                        ));
                    }

                    republish_thermal_state(platform, notifications, publisher, listener_shutdown)
                        .await;
                });
            })?;

        log::debug!("Thermal state subscription registered");

        Ok(Self {
            shutdown_tx,
            worker: Some(worker),
        })
    }

    /// Unregister and wait for the worker thread to exit.
    pub(crate) fn stop(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };

        // send() only fails if the worker already exited
        let _ = self.shutdown_tx.send(());
        if worker.join().is_err() {
            log::error!("Thermal state worker panicked");
        }
        log::debug!("Thermal state subscription unregistered");
    }
}

impl Drop for ThermalSubscription {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Re-read and republish the thermal state on every notification.
///
/// A lagged receiver collapses the missed notifications into one re-read.
async fn republish_thermal_state(
    platform: Arc<dyn DevicePlatform>,
    mut notifications: broadcast::Receiver<DeviceNotification>,
    publisher: watch::Sender<ThermalState>,
    mut shutdown: broadcast::Receiver<()>,
) {
    loop {
        tokio::select! {
            received = notifications.recv() => match received {
                Ok(DeviceNotification::ThermalStateDidChange) => {
                    republish(platform.as_ref(), &publisher);
                }
                Err(RecvError::Lagged(skipped)) => {
                    log::debug!("Thermal subscription lagged by {} notification(s)", skipped);
                    republish(platform.as_ref(), &publisher);
                }
                Err(RecvError::Closed) => break,
            },
            _ = shutdown.recv() => break,
        }
    }
}

fn republish(platform: &dyn DevicePlatform, publisher: &watch::Sender<ThermalState>) {
    let state = platform.thermal_state();
    let previous = publisher.send_replace(state);

    if previous != state {
        log::info!("Thermal state changed: {} -> {}", previous, state);
    } else {
        log::trace!("Thermal state republished: {}", state);
    }
}
