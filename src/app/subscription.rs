// SPDX-License-Identifier: MPL-2.0
//! Time-driven subscriptions for the application.

use super::{config, Message};
use iced::{time, Subscription};

/// Ticks while toasts are on screen so expired ones can be dismissed.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(config::NOTIFICATION_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
