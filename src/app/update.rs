// SPDX-License-Identifier: MPL-2.0
//! Message routing for the application shell.
//!
//! Component messages are forwarded to their owners; the resulting events
//! are turned into notification pushes or route changes here.

use super::Message;
use crate::ui::footer;
use crate::ui::navigation::Router;
use crate::ui::notifications;
use iced::Task;
use std::time::Instant;

/// Mutable slices of `App` needed while handling a message.
pub struct UpdateContext<'a> {
    pub footer: &'a mut footer::State,
    pub notifications: &'a mut notifications::Manager,
    pub router: &'a mut Router,
}

/// Forwards a footer message and applies the event it produces.
pub fn handle_footer_message(
    ctx: &mut UpdateContext<'_>,
    message: footer::Message,
) -> Task<Message> {
    match footer::update(ctx.footer, message) {
        footer::Event::None => {}
        footer::Event::Notify(notification) => ctx.notifications.push(notification),
        footer::Event::Navigate(destination) => {
            ctx.router.navigate(&destination);
        }
    }
    Task::none()
}

pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: &notifications::NotificationMessage,
) -> Task<Message> {
    ctx.notifications.handle_message(message);
    Task::none()
}

pub fn handle_back(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.router.back();
    Task::none()
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.notifications.tick_at(now);
    Task::none()
}
