// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle: at most [`MAX_VISIBLE`] on screen, the rest wait in
//! arrival order and move up as on-screen toasts are dismissed or expire.

use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of notifications visible at once.
pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

#[derive(Debug, Default)]
pub struct Manager {
    /// On screen, newest at the front.
    shown: VecDeque<Notification>,
    /// Waiting for a free slot, oldest at the front.
    pending: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification` now if a slot is free, else queues it.
    pub fn push(&mut self, notification: Notification) {
        if notification.severity() == Severity::Warning {
            tracing::warn!(title = notification.title(), "warning notification");
        }

        if self.shown.len() < MAX_VISIBLE && self.pending.is_empty() {
            self.shown.push_front(notification);
        } else {
            self.pending.push_back(notification);
        }
    }

    /// Removes the toast with `id`, wherever it is.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.len();
        self.shown.retain(|n| n.id() != id);
        self.pending.retain(|n| n.id() != id);
        self.refill(Instant::now());
        self.len() < before
    }

    /// Expires on-screen toasts whose lifetime has elapsed at `now`.
    ///
    /// Queued toasts do not age; their lifetime starts when they move up.
    pub fn tick_at(&mut self, now: Instant) {
        let before = self.shown.len();
        self.shown.retain(|n| !n.is_expired_at(now));
        if self.shown.len() != before {
            self.refill(now);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    /// On-screen toasts, newest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.shown.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.shown.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        self.len() > 0
    }

    fn len(&self) -> usize {
        self.shown.len() + self.pending.len()
    }

    fn refill(&mut self, now: Instant) {
        while self.shown.len() < MAX_VISIBLE {
            let Some(mut next) = self.pending.pop_front() else {
                break;
            };
            next.mark_shown(now);
            self.shown.push_front(next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn titles(manager: &Manager) -> Vec<&str> {
        manager.visible().map(Notification::title).collect()
    }

    fn filled(count: usize) -> (Manager, Vec<NotificationId>) {
        let mut manager = Manager::new();
        let ids = (0..count)
            .map(|i| {
                let toast = Notification::error(format!("n{i}"));
                let id = toast.id();
                manager.push(toast);
                id
            })
            .collect();
        (manager, ids)
    }

    #[test]
    fn starts_empty() {
        let manager = Manager::new();
        assert!(!manager.has_notifications());
        assert_eq!(manager.visible_count() + manager.queued_count(), 0);
    }

    #[test]
    fn newest_toast_is_on_top() {
        let (manager, _) = filled(2);
        assert_eq!(titles(&manager), vec!["n1", "n0"]);
    }

    #[test]
    fn overflow_waits_in_queue() {
        let (manager, _) = filled(MAX_VISIBLE + 2);
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 2);
        assert!(manager.has_notifications());
    }

    #[test]
    fn dismissing_shown_toast_promotes_oldest_waiting() {
        let (mut manager, ids) = filled(MAX_VISIBLE + 2);

        assert!(manager.dismiss(ids[0]));
        assert_eq!(manager.queued_count(), 1);
        assert_eq!(titles(&manager).first(), Some(&"n3"));
    }

    #[test]
    fn dismissing_queued_toast_leaves_screen_alone() {
        let (mut manager, ids) = filled(MAX_VISIBLE + 1);
        let shown_before = titles(&manager).join(",");

        assert!(manager.dismiss(ids[MAX_VISIBLE]));
        assert_eq!(manager.queued_count(), 0);
        assert_eq!(titles(&manager).join(","), shown_before);
    }

    #[test]
    fn dismissing_unknown_id_is_a_no_op() {
        let (mut manager, _) = filled(1);
        let stranger = Notification::info("elsewhere").id();

        assert!(!manager.dismiss(stranger));
        assert_eq!(manager.visible_count(), 1);
    }

    #[test]
    fn dismiss_message_routes_to_dismiss() {
        let (mut manager, ids) = filled(1);
        manager.handle_message(&Message::Dismiss(ids[0]));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn tick_expires_only_elapsed_toasts() {
        let mut manager = Manager::new();
        let quick = Notification::success("quick");
        let now = quick.created_at();
        manager.push(quick);
        manager.push(Notification::error("sticky"));

        manager.tick_at(now + Duration::from_secs(1));
        assert_eq!(manager.visible_count(), 2);

        manager.tick_at(now + Duration::from_secs(10));
        assert_eq!(titles(&manager), vec!["sticky"]);
    }

    #[test]
    fn expiry_makes_room_for_queue() {
        let mut manager = Manager::new();
        let base = Instant::now();
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::info(format!("info{i}")));
        }
        manager.push(Notification::error("waiting"));
        assert_eq!(manager.queued_count(), 1);

        manager.tick_at(base + Duration::from_secs(60));
        assert_eq!(titles(&manager), vec!["waiting"]);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn validation_style_error_expires() {
        let mut manager = Manager::new();
        let toast = Notification::error("Email is required").auto_dismiss(Duration::from_secs(5));
        let created = toast.created_at();
        manager.push(toast);

        manager.tick_at(created + Duration::from_secs(5));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn promoted_toast_gets_its_full_lifetime() {
        let mut manager = Manager::new();
        let first = Notification::error("Email is required").auto_dismiss(Duration::from_secs(5));
        let start = first.created_at();
        manager.push(first);
        for _ in 1..=MAX_VISIBLE {
            manager.push(
                Notification::error("Email is required").auto_dismiss(Duration::from_secs(5)),
            );
        }
        assert_eq!(manager.queued_count(), 1);

        let promoted_at = start + Duration::from_millis(5_100);
        manager.tick_at(promoted_at);
        assert_eq!(manager.visible_count(), 1);
        assert_eq!(manager.queued_count(), 0);

        manager.tick_at(promoted_at + Duration::from_millis(100));
        assert_eq!(manager.visible_count(), 1, "promoted toast left after one tick");

        manager.tick_at(promoted_at + Duration::from_secs(5));
        assert!(!manager.has_notifications());
    }
}
