//! Notification lifecycle queue.
//!
//! The queue holds at most one notification at a time: enqueueing replaces
//! whatever is alive, and the displaced entry is dropped without running its
//! exit sequence or producing a removal event.
//!
//! Per-entry lifecycle:
//!
//! 1. Entering: a short fixed delay before the entrance animation state.
//! 2. Visible: a countdown from 100% that steps down every 100 ms to reach
//!    0% at the notification's duration.
//! 3. Exiting: a grace period for the exit animation, then removal
//!    (500 ms after a timed expiry, 300 ms after a manual dismissal).
//!
//! All timers are fields of the entry itself, so replacing or removing the
//! entry discards them as a unit; a stale deadline can never act on a
//! superseded entry.

use crate::model::NotificationData;
use std::time::{Duration, Instant};

/// Delay before the entrance animation state is entered.
pub const ENTRANCE_DELAY: Duration = Duration::from_millis(10);
/// Interval between countdown progress steps.
pub const PROGRESS_TICK: Duration = Duration::from_millis(100);
/// Exit grace period after the countdown reaches zero.
pub const TIMED_EXIT_GRACE: Duration = Duration::from_millis(500);
/// Exit grace period after a manual dismissal.
pub const DISMISS_EXIT_GRACE: Duration = Duration::from_millis(300);

// ===== NoticeId =====

/// Identifier of a queued notification, unique across concurrently-alive
/// entries (and in practice across the whole session).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoticeId(u64);

impl std::fmt::Display for NoticeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "notice-{}", self.0)
    }
}

// ===== NoticePhase =====

/// Visual lifecycle phase of the displayed notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticePhase {
    /// Waiting out the entrance delay; rendered without the "shown" style.
    Entering,
    /// Fully visible with the countdown running.
    Visible,
    /// Exit animation running; removal is scheduled.
    Exiting,
}

// ===== ActiveNotice =====

/// The single live notification plus all of its scoped timers.
#[derive(Debug, Clone)]
pub struct ActiveNotice {
    id: NoticeId,
    data: NotificationData,
    phase: NoticePhase,
    /// Countdown in percent, 100.0 down to 0.0.
    progress: f64,
    enter_at: Instant,
    next_step: Instant,
    remove_at: Option<Instant>,
}

impl ActiveNotice {
    fn new(id: NoticeId, data: NotificationData, now: Instant) -> Self {
        Self {
            id,
            data,
            phase: NoticePhase::Entering,
            progress: 100.0,
            enter_at: now + ENTRANCE_DELAY,
            next_step: now + PROGRESS_TICK,
            remove_at: None,
        }
    }

    /// Queue-assigned identifier.
    pub fn id(&self) -> NoticeId {
        self.id
    }

    /// The notification content.
    pub fn data(&self) -> &NotificationData {
        &self.data
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> NoticePhase {
        self.phase
    }

    /// Countdown progress in percent (100.0 → 0.0).
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Percent removed per 100 ms step, proportional to the duration.
    fn step(&self) -> f64 {
        100.0 / (self.data.duration_ms as f64 / PROGRESS_TICK.as_millis() as f64)
    }
}

// ===== NoticeEvent =====

/// Observable lifecycle event emitted by [`NotificationQueue::tick`].
///
/// Only entries that complete their exit sequence produce a `Removed` event;
/// entries displaced by a newer enqueue vanish silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeEvent {
    /// The entry finished its exit grace period and left the queue.
    Removed(NoticeId),
}

// ===== NotificationQueue =====

/// Singleton-replacing queue of timed, dismissible notices.
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    current: Option<ActiveNotice>,
    next_id: u64,
}

impl NotificationQueue {
    /// Empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// The live notification, if any.
    pub fn current(&self) -> Option<&ActiveNotice> {
        self.current.as_ref()
    }

    /// Enqueue a notification, assigning it a fresh id and replacing the
    /// entire queue with it. Any prior entry is discarded immediately,
    /// together with all of its timers, and fires no removal event.
    pub fn enqueue(&mut self, data: NotificationData, now: Instant) -> NoticeId {
        let id = NoticeId(self.next_id);
        self.next_id += 1;
        self.current = Some(ActiveNotice::new(id, data, now));
        id
    }

    /// User-initiated dismissal of the live notification: enters the exit
    /// phase immediately with the shorter removal grace period. No-op when
    /// the queue is empty or the entry is already exiting.
    pub fn dismiss(&mut self, now: Instant) {
        if let Some(notice) = self.current.as_mut() {
            if notice.phase != NoticePhase::Exiting {
                notice.phase = NoticePhase::Exiting;
                notice.remove_at = Some(now + DISMISS_EXIT_GRACE);
            }
        }
    }

    /// Remove an entry by id. Idempotent: an absent id is a no-op. Removal
    /// here is immediate and produces no event (the timers leave with the
    /// entry).
    pub fn remove(&mut self, id: NoticeId) {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
        }
    }

    /// Advance all lifecycle timers to `now`, returning the events that
    /// fired. Safe to call at any cadence; deadlines are absolute.
    pub fn tick(&mut self, now: Instant) -> Vec<NoticeEvent> {
        let mut events = Vec::new();

        let Some(notice) = self.current.as_mut() else {
            return events;
        };

        if notice.phase == NoticePhase::Entering && now >= notice.enter_at {
            notice.phase = NoticePhase::Visible;
        }

        if notice.phase == NoticePhase::Visible {
            while now >= notice.next_step && notice.phase == NoticePhase::Visible {
                notice.progress = (notice.progress - notice.step()).max(0.0);
                notice.next_step += PROGRESS_TICK;
                if notice.progress <= 0.0 {
                    notice.phase = NoticePhase::Exiting;
                    notice.remove_at = Some(now + TIMED_EXIT_GRACE);
                }
            }
        }

        if notice.phase == NoticePhase::Exiting {
            if let Some(remove_at) = notice.remove_at {
                if now >= remove_at {
                    events.push(NoticeEvent::Removed(notice.id));
                    self.current = None;
                }
            }
        }

        events
    }

    /// Earliest instant at which [`tick`](Self::tick) could change state,
    /// used by the event loop to pick a poll timeout.
    pub fn next_deadline(&self) -> Option<Instant> {
        let notice = self.current.as_ref()?;
        Some(match notice.phase {
            NoticePhase::Entering => notice.enter_at.min(notice.next_step),
            NoticePhase::Visible => notice.next_step,
            NoticePhase::Exiting => notice.remove_at.unwrap_or(notice.next_step),
        })
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "notifications_tests.rs"]
mod tests;
