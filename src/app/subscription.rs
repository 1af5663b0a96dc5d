// SPDX-License-Identifier: MPL-2.0
//! Periodic subscriptions for the application.
//!
//! The host platform does not notify us of locale or theme changes, so both
//! are polled while they can still affect the rendered screen.

use super::Message;
use crate::config::LOCALE_POLL_INTERVAL_MS;
use iced::{time, Subscription};
use std::time::Duration;

/// Ticks while the locale follows the OS or the theme follows the system.
pub fn create_tick_subscription(locale_pinned: bool, follows_system_theme: bool) -> Subscription<Message> {
    if locale_pinned && !follows_system_theme {
        Subscription::none()
    } else {
        time::every(Duration::from_millis(LOCALE_POLL_INTERVAL_MS)).map(Message::Tick)
    }
}
