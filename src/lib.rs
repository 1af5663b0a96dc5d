// SPDX-License-Identifier: MPL-2.0
//! `greeting_lens` is a single-screen greeting application built with the Iced GUI framework.
//!
//! It renders five localized lines inside a themed surface and demonstrates
//! internationalization with Fluent, explicit theme scoping, and view
//! composition that can be tested without a running window.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod ui;
