//! The stock reconciliation protocol.
//!
//! A pass compares every cart item's requested quantity against one
//! batched, consistent server stock snapshot and either auto-resolves
//! the mismatches (remove or clamp, with a notification each) or
//! returns them for manual resolution.

use crate::cart::Cart;
use crate::error::{CartError, StockError};
use crate::notify::{Notifier, Severity};
use crate::stock::client::{StockLevel, StockSource};
use crate::stock::issue::{IssueKind, StockIssue};
use bloom_catalog::ProductId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Protocol timing configuration.
///
/// All windows are injectable so tests can run the protocol with
/// zero or near-zero values.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Periodic reconciliation interval.
    pub interval: Duration,
    /// Minimum spacing between network passes. A trigger that lands
    /// inside this window is dropped, not deferred.
    pub cooldown: Duration,
    /// How long a manual "keep" choice suppresses re-flagging, as long
    /// as the server stock stays at the value seen when kept.
    pub keep_grace: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(30),
            cooldown: Duration::from_secs(5),
            keep_grace: Duration::from_secs(300),
        }
    }
}

impl SyncConfig {
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    pub fn with_keep_grace(mut self, keep_grace: Duration) -> Self {
        self.keep_grace = keep_grace;
        self
    }
}

/// What initiated a reconciliation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncTrigger {
    /// Consuming view mounted.
    Mount,
    /// Periodic timer fired.
    Interval,
    /// Window focus regained.
    Focus,
    /// Page visibility regained.
    Visibility,
    /// Explicit user request.
    Manual,
}

impl SyncTrigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncTrigger::Mount => "mount",
            SyncTrigger::Interval => "interval",
            SyncTrigger::Focus => "focus",
            SyncTrigger::Visibility => "visibility",
            SyncTrigger::Manual => "manual",
        }
    }
}

/// How issues found by a pass are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveMode {
    /// Remove out-of-stock items, clamp insufficient ones, notify.
    Auto,
    /// Return issues untouched for the UI to present.
    Manual,
}

/// Manual resolution choice for one issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Remove the item from the cart.
    Remove,
    /// Clamp the quantity down to the available stock.
    Clamp,
    /// Keep the current quantity; suppress re-flagging for the grace
    /// window while stock stays where it was.
    Keep,
}

/// Result of one reconciliation pass.
#[derive(Debug, Clone, PartialEq)]
pub enum PassOutcome {
    /// Cart was empty; nothing to check.
    SkippedEmpty,
    /// Inside the cooldown window; no network call was made.
    Throttled,
    /// Pass ran; these issues were found (and, in auto mode, already
    /// resolved).
    Completed(Vec<StockIssue>),
}

/// A "keep" override recorded by manual resolution.
#[derive(Debug, Clone)]
struct KeptOverride {
    product_id: ProductId,
    stock_at_keep: i64,
    kept_at: Instant,
}

/// Runs reconciliation passes against a stock source.
///
/// Single-writer by construction: the cart is only ever mutated
/// through its own operations, inside a pass the caller drives.
pub struct Reconciler<S, N> {
    source: S,
    notifier: N,
    config: SyncConfig,
    /// Throttle guard: last attempted pass, not a queue.
    last_attempt: Option<Instant>,
    kept: Vec<KeptOverride>,
}

impl<S: StockSource, N: Notifier> Reconciler<S, N> {
    pub fn new(source: S, notifier: N, config: SyncConfig) -> Self {
        Self {
            source,
            notifier,
            config,
            last_attempt: None,
            kept: Vec::new(),
        }
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Run one reconciliation pass.
    ///
    /// On a network error the cart and any previously surfaced issues
    /// are left unchanged; the error is logged and returned, and the
    /// next trigger simply tries again.
    pub async fn run_pass(
        &mut self,
        cart: &mut Cart,
        trigger: SyncTrigger,
        mode: ResolveMode,
    ) -> Result<PassOutcome, StockError> {
        if cart.is_empty() {
            debug!(trigger = trigger.as_str(), "pass skipped: cart empty");
            return Ok(PassOutcome::SkippedEmpty);
        }

        let now = Instant::now();
        if let Some(last) = self.last_attempt {
            if now.duration_since(last) < self.config.cooldown {
                debug!(trigger = trigger.as_str(), "pass dropped: inside cooldown");
                return Ok(PassOutcome::Throttled);
            }
        }
        self.last_attempt = Some(now);

        let ids: Vec<ProductId> = cart.items.iter().map(|i| i.product_id.clone()).collect();
        let levels = self.source.check_stock(&ids).await.map_err(|e| {
            warn!(trigger = trigger.as_str(), error = %e, "stock check failed, pass aborted");
            e
        })?;
        let snapshot: HashMap<&ProductId, &StockLevel> =
            levels.iter().map(|l| (&l.product_id, l)).collect();

        // Overrides for items no longer in the cart are stale.
        self.kept
            .retain(|k| cart.items.iter().any(|i| i.product_id == k.product_id));

        let mut issues = Vec::new();
        for item in &cart.items {
            let Some(level) = snapshot.get(&item.product_id) else {
                debug!(product_id = %item.product_id, "no stock data for item, skipping");
                continue;
            };
            let Some(issue) = StockIssue::classify(
                &item.product_id,
                &item.name,
                item.quantity,
                level.stock,
            ) else {
                // Stock covers the request; a kept override is moot.
                self.kept.retain(|k| k.product_id != item.product_id);
                continue;
            };
            if self.keep_still_holds(&issue, now) {
                debug!(product_id = %issue.product_id, "issue suppressed by keep override");
                continue;
            }
            self.kept.retain(|k| k.product_id != issue.product_id);
            issues.push(issue);
        }

        debug!(
            trigger = trigger.as_str(),
            issues = issues.len(),
            "reconciliation pass complete"
        );

        if mode == ResolveMode::Auto {
            for issue in &issues {
                self.auto_resolve(cart, issue);
            }
        }

        Ok(PassOutcome::Completed(issues))
    }

    /// Apply one manual resolution choice.
    pub fn resolve(
        &mut self,
        cart: &mut Cart,
        issue: &StockIssue,
        choice: Resolution,
    ) -> Result<(), CartError> {
        match choice {
            Resolution::Remove => {
                cart.remove_item(&issue.product_id);
                Ok(())
            }
            Resolution::Clamp => {
                if issue.available_stock <= 0 {
                    cart.remove_item(&issue.product_id);
                    Ok(())
                } else {
                    cart.update_quantity(&issue.product_id, issue.available_stock)
                        .map(|_| ())
                }
            }
            Resolution::Keep => {
                self.kept.retain(|k| k.product_id != issue.product_id);
                self.kept.push(KeptOverride {
                    product_id: issue.product_id.clone(),
                    stock_at_keep: issue.available_stock,
                    kept_at: Instant::now(),
                });
                Ok(())
            }
        }
    }

    /// Whether a keep override still suppresses this issue: stock must
    /// be where it was when kept, and the grace window must not have
    /// elapsed.
    fn keep_still_holds(&self, issue: &StockIssue, now: Instant) -> bool {
        self.kept.iter().any(|k| {
            k.product_id == issue.product_id
                && k.stock_at_keep == issue.available_stock
                && now.duration_since(k.kept_at) < self.config.keep_grace
        })
    }

    fn auto_resolve(&self, cart: &mut Cart, issue: &StockIssue) {
        match issue.kind {
            IssueKind::OutOfStock => {
                cart.remove_item(&issue.product_id);
                self.notifier.notify(
                    Severity::Warning,
                    &format!(
                        "{} was removed from your cart: out of stock",
                        issue.product_name
                    ),
                );
            }
            IssueKind::InsufficientStock => {
                // Clamping downward cannot exceed the quantity limit.
                if let Err(e) = cart.update_quantity(&issue.product_id, issue.available_stock) {
                    warn!(product_id = %issue.product_id, error = %e, "clamp failed");
                    return;
                }
                self.notifier.notify(
                    Severity::Info,
                    &format!(
                        "{} quantity reduced to {}: limited stock",
                        issue.product_name, issue.available_stock
                    ),
                );
            }
        }
    }
}
