//! Trigger scheduling for the reconciliation protocol.
//!
//! One background task serializes all passes: the periodic interval
//! and the host-delivered triggers (mount, focus, visibility) feed the
//! same loop, so no two passes ever overlap. The throttle inside the
//! reconciler drops anything arriving inside the cooldown window.

use crate::cart::Cart;
use crate::notify::Notifier;
use crate::stock::client::StockSource;
use crate::stock::reconcile::{Reconciler, ResolveMode, SyncTrigger};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

/// Capacity of the trigger channel. Overflowing triggers are dropped;
/// the cooldown would drop them anyway.
const TRIGGER_BUFFER: usize = 8;

/// Drives periodic and event-driven reconciliation passes.
pub struct SyncScheduler {
    trigger_tx: mpsc::Sender<SyncTrigger>,
    handle: JoinHandle<()>,
}

impl SyncScheduler {
    /// Spawn the scheduling task.
    ///
    /// The first interval tick fires immediately and serves as the
    /// mount pass.
    pub fn spawn<S, N>(
        mut reconciler: Reconciler<S, N>,
        cart: Arc<Mutex<Cart>>,
        mode: ResolveMode,
    ) -> Self
    where
        S: StockSource + 'static,
        N: Notifier + 'static,
    {
        let (trigger_tx, mut trigger_rx) = mpsc::channel(TRIGGER_BUFFER);
        let interval = reconciler.config().interval;

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut first = true;

            loop {
                let trigger = tokio::select! {
                    _ = ticker.tick() => {
                        if first {
                            first = false;
                            SyncTrigger::Mount
                        } else {
                            SyncTrigger::Interval
                        }
                    }
                    received = trigger_rx.recv() => match received {
                        Some(t) => t,
                        None => break,
                    },
                };

                let mut cart = cart.lock().await;
                match reconciler.run_pass(&mut cart, trigger, mode).await {
                    Ok(outcome) => {
                        debug!(trigger = trigger.as_str(), ?outcome, "pass finished")
                    }
                    Err(e) => {
                        // Best effort: cart untouched, next trigger retries.
                        warn!(trigger = trigger.as_str(), error = %e, "pass aborted")
                    }
                }
            }
        });

        Self { trigger_tx, handle }
    }

    /// Deliver an external trigger (focus, visibility, manual).
    /// Non-blocking; a full buffer drops the trigger.
    pub fn trigger(&self, trigger: SyncTrigger) {
        if self.trigger_tx.try_send(trigger).is_err() {
            debug!(trigger = trigger.as_str(), "trigger dropped: buffer full");
        }
    }

    /// Stop scheduling. An in-flight pass may complete; its result is
    /// discarded with the task.
    pub fn shutdown(self) {
        self.handle.abort();
    }
}
