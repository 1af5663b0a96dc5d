// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Spacing**: Spacing scale (8px grid)
- **Typography**: Font size scale

## Examples

```
use greeting_lens::ui::design_tokens::{palette, spacing};

let background = palette::WHITE;
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_950: Color = Color::from_rgb(0.071, 0.071, 0.071); // #121212
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const NONE: f32 = 0.0;
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit, preview frame
    pub const MD: f32 = 16.0; // 2 units
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale following Material Design type scale principles.

    /// Standard body - Most UI text
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XXS > spacing::NONE);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::MD > spacing::XS);

    assert!(typography::BODY > 0.0);

    assert!(palette::GRAY_950.r >= 0.0 && palette::GRAY_950.r <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::XS, spacing::XXS * 2.0);
        assert_eq!(spacing::MD, spacing::XS * 2.0);
    }
}
