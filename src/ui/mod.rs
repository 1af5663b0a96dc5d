// SPDX-License-Identifier: MPL-2.0
//! User interface composition.
//!
//! Views are composed as plain [`greeting::Node`] trees from explicit inputs
//! (theme scope, resource table, locale, layout) and only converted to Iced
//! widgets at the edge.
//!
//! - [`greeting`] - The greeting screen and the fragment tree
//! - [`preview`] - Named locale previews of the greeting screen
//! - [`theming`] - Light/Dark/System theme and the scoped styling context
//! - [`design_tokens`] - Design system constants (colors, spacing, typography)

pub mod design_tokens;
pub mod greeting;
pub mod preview;
pub mod theming;
