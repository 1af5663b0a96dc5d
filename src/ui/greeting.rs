// SPDX-License-Identifier: MPL-2.0
//! Greeting screen composition.
//!
//! [`greeting`] is a pure function from the theme scope, the resource table,
//! the active locale and a layout constraint to a [`Node`] tree. The tree is
//! plain data, so it can be compared in tests; [`Node::view`] turns it into
//! Iced widgets.

use crate::i18n::{ResourceTable, StringKey};
use crate::ui::design_tokens::spacing;
use crate::ui::theming::ThemeScope;
use iced::widget::{container, text, Column};
use iced::{Background, Color, Element, Length, Theme};
use unic_langid::LanguageIdentifier;

/// How a fragment sizes itself inside its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub width: Length,
    pub height: Length,
    pub padding: f32,
}

impl Layout {
    /// Fill all available space.
    #[must_use]
    pub fn fill() -> Self {
        Self {
            width: Length::Fill,
            height: Length::Fill,
            padding: spacing::NONE,
        }
    }

    /// Take only the space the content needs.
    #[must_use]
    pub fn shrink() -> Self {
        Self {
            width: Length::Shrink,
            height: Length::Shrink,
            padding: spacing::NONE,
        }
    }

    #[must_use]
    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::fill()
    }
}

/// Renderable fragment tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Opaque container painted with a single color.
    Surface {
        color: Color,
        layout: Layout,
        child: Box<Node>,
    },
    /// Children stacked vertically in order.
    Column {
        layout: Layout,
        spacing: f32,
        children: Vec<Node>,
    },
    Text {
        content: String,
        color: Color,
        size: f32,
    },
}

impl Node {
    /// Layout of the outermost container (text nodes shrink to their content).
    #[must_use]
    pub fn layout(&self) -> Layout {
        match self {
            Node::Surface { layout, .. } | Node::Column { layout, .. } => *layout,
            Node::Text { .. } => Layout::shrink(),
        }
    }

    /// Text contents of the tree in document order.
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        let mut lines = Vec::new();
        self.collect_lines(&mut lines);
        lines
    }

    fn collect_lines<'a>(&'a self, lines: &mut Vec<&'a str>) {
        match self {
            Node::Surface { child, .. } => child.collect_lines(lines),
            Node::Column { children, .. } => {
                for child in children {
                    child.collect_lines(lines);
                }
            }
            Node::Text { content, .. } => lines.push(content),
        }
    }

    /// Builds the Iced widget tree for this fragment.
    ///
    /// The widgets own their text, so the tree can be dropped right after.
    pub fn view<'a, Message: 'a>(&self) -> Element<'a, Message> {
        match self {
            Node::Surface {
                color,
                layout,
                child,
            } => {
                let color = *color;
                container(child.view())
                    .width(layout.width)
                    .height(layout.height)
                    .padding(layout.padding)
                    .style(move |_theme: &Theme| container::Style {
                        background: Some(Background::Color(color)),
                        ..container::Style::default()
                    })
                    .into()
            }
            Node::Column {
                layout,
                spacing,
                children,
            } => Column::with_children(children.iter().map(|child| child.view()))
                .width(layout.width)
                .height(layout.height)
                .padding(layout.padding)
                .spacing(*spacing)
                .into(),
            Node::Text {
                content,
                color,
                size,
            } => text(content.clone()).size(*size).color(*color).into(),
        }
    }
}

/// Inputs of the greeting screen.
pub struct GreetingContext<'a> {
    pub theme: &'a ThemeScope<'a>,
    pub strings: &'a ResourceTable,
    pub locale: &'a LanguageIdentifier,
    pub layout: Layout,
}

/// Formats one displayed line.
#[must_use]
pub fn line(key: StringKey, text: &str) -> String {
    format!("{}. {}", key.ordinal(), text)
}

/// Composes the five greeting lines, one per [`StringKey`], in key order.
///
/// A locale the table does not package is negotiated to one it does.
#[must_use]
pub fn greeting(ctx: &GreetingContext<'_>) -> Node {
    let locale = ctx.strings.negotiate(ctx.locale);

    let children = StringKey::ALL
        .into_iter()
        .map(|key| {
            // Negotiated locales are always packaged with every key.
            let resolved = ctx.strings.lookup(&locale, key).unwrap_or_default();
            Node::Text {
                content: line(key, resolved),
                color: ctx.theme.text_color(),
                size: ctx.theme.text_size(),
            }
        })
        .collect();

    Node::Column {
        layout: ctx.layout,
        spacing: spacing::XXS,
        children,
    }
}

/// Wraps `child` in a surface painted with the theme background.
#[must_use]
pub fn background_surface(theme: &ThemeScope<'_>, layout: Layout, child: Node) -> Node {
    Node::Surface {
        color: theme.background(),
        layout,
        child: Box::new(child),
    }
}
