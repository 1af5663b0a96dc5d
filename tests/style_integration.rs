// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use greeting_lens::i18n::ResourceTable;
    use greeting_lens::ui::design_tokens::{palette, spacing, typography};
    use greeting_lens::ui::greeting::{self, GreetingContext, Layout, Node};
    use greeting_lens::ui::theming::{AppTheme, ColorScheme, ThemeMode};
    use iced::advanced::Widget;
    use iced::{Color, Element, Length, Size};

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::GRAY_950;
        let _ = palette::WHITE;
        let _ = spacing::MD;
        let _ = typography::BODY;
    }

    #[test]
    fn theming_switches_correctly() {
        let light = AppTheme::new(ThemeMode::Light);
        let dark = AppTheme::new(ThemeMode::Dark);

        // Backgrounds should be visually opposite between light and dark
        assert!(light.colors.background.r > dark.colors.background.r);

        // Text colors should also be opposite between light and dark
        assert!(light.colors.on_background.r < dark.colors.on_background.r);
    }

    #[test]
    fn custom_scheme_flows_into_rendered_tree() {
        let indigo = Color::from_rgb(0.216, 0.0, 0.702);
        let teal = Color::from_rgb(0.012, 0.855, 0.773);
        let scheme = ColorScheme {
            background: indigo,
            on_background: teal,
            ..ColorScheme::light()
        };
        let theme = AppTheme::with_colors(ThemeMode::Light, scheme);
        let strings = ResourceTable::load().unwrap();
        let locale = "en-US".parse().unwrap();

        let node = theme.provide(|scope| {
            let content = greeting::greeting(&GreetingContext {
                theme: scope,
                strings: &strings,
                locale: &locale,
                layout: Layout::fill(),
            });
            greeting::background_surface(scope, Layout::fill(), content)
        });

        let Node::Surface { color, child, .. } = node else {
            panic!("expected surface");
        };
        assert_eq!(color, indigo);
        let Node::Column { children, .. } = *child else {
            panic!("expected column");
        };
        assert!(children
            .iter()
            .all(|c| matches!(c, Node::Text { color, .. } if *color == teal)));
    }

    #[test]
    fn fragment_converts_to_widgets() {
        let theme = AppTheme::new(ThemeMode::Dark);
        let strings = ResourceTable::load().unwrap();
        let locale = "pl".parse().unwrap();
        let node = theme.provide(|scope| {
            greeting::greeting(&GreetingContext {
                theme: scope,
                strings: &strings,
                locale: &locale,
                layout: Layout::default(),
            })
        });

        let element: Element<'_, ()> = node.view();
        let widget = element.as_widget();
        assert_eq!(widget.size(), Size::new(Length::Fill, Length::Fill));
        assert_eq!(widget.children().len(), 5);
    }

    #[test]
    fn surface_converts_to_sized_container() {
        let theme = AppTheme::new(ThemeMode::Light);
        let strings = ResourceTable::load().unwrap();
        let locale = "uk".parse().unwrap();
        let node = theme.provide(|scope| {
            let content = greeting::greeting(&GreetingContext {
                theme: scope,
                strings: &strings,
                locale: &locale,
                layout: Layout::fill(),
            });
            greeting::background_surface(
                scope,
                Layout::shrink().padding(spacing::XS),
                content,
            )
        });

        let element: Element<'_, ()> = node.view();
        let widget = element.as_widget();
        assert_eq!(widget.size(), Size::new(Length::Shrink, Length::Shrink));
        // The container wraps exactly the greeting column.
        assert_eq!(widget.children().len(), 1);
    }
}
