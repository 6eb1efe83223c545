//! Responsive layout rules for blog list items.
//!
//! Every breakpoint decision and derived size for a list item comes from
//! [`blog_item_layout`], so markup, inline styles and the per-item style block
//! never disagree about the threshold.

/// Viewport width (px) at which the large-screen layout starts.
pub const LARGE_SCREEN_MIN_WIDTH: u32 = 1540;

/// Width assumed when no viewport can be observed.
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1600;

/// Share of the viewport width taken by the cover on large screens.
const COVER_WIDTH_RATIO: f64 = 0.3;

/// Cover aspect ratio (height over width).
const COVER_ASPECT: f64 = 9.0 / 16.0;

/// Vertical padding added around the cover (px).
const CONTAINER_PADDING: f64 = 128.0;

/// Screen class derived from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenClass {
    Small,
    Large,
}

impl ScreenClass {
    /// Classify a viewport width.
    pub fn from_width(width: u32) -> Self {
        if width >= LARGE_SCREEN_MIN_WIDTH {
            Self::Large
        } else {
            Self::Small
        }
    }
}

/// Where the cover image goes relative to the text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverPlacement {
    /// Full width, stacked above the text.
    Above,
    /// Trailing side of a horizontal row.
    Trailing,
}

/// Fixed size of the "More" button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonSize {
    pub width: u32,
    pub height: u32,
    pub font_size: u32,
}

impl ButtonSize {
    /// Inline style for the button box.
    pub fn style(&self) -> String {
        format!(
            "width: {}px; height: {}px; font-size: {}px; border-radius: {}px;",
            self.width,
            self.height,
            self.font_size,
            self.height / 2
        )
    }
}

/// Layout parameters for one list item at one viewport width.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogItemLayout {
    /// Screen class the parameters were derived for.
    pub screen: ScreenClass,

    /// Cover image placement.
    pub cover: CoverPlacement,

    /// Visible lines for the title.
    pub title_lines: u8,

    /// Visible lines for the summary.
    pub summary_lines: u8,

    /// "More" button size.
    pub button: ButtonSize,

    /// Minimum container height (px); large screens only.
    pub min_height: Option<f64>,
}

/// Derive the item layout for a viewport width.
pub fn blog_item_layout(width: u32) -> BlogItemLayout {
    match ScreenClass::from_width(width) {
        ScreenClass::Small => BlogItemLayout {
            screen: ScreenClass::Small,
            cover: CoverPlacement::Above,
            title_lines: 1,
            summary_lines: 1,
            button: ButtonSize {
                width: 80,
                height: 36,
                font_size: 18,
            },
            min_height: None,
        },
        ScreenClass::Large => BlogItemLayout {
            screen: ScreenClass::Large,
            cover: CoverPlacement::Trailing,
            title_lines: 2,
            summary_lines: 2,
            button: ButtonSize {
                width: 120,
                height: 56,
                font_size: 28,
            },
            min_height: Some(container_min_height(width)),
        },
    }
}

/// Minimum row height keeping the trailing cover plus padding visible.
pub fn container_min_height(width: u32) -> f64 {
    f64::from(width) * COVER_WIDTH_RATIO * COVER_ASPECT + CONTAINER_PADDING
}

impl BlogItemLayout {
    /// Whether this is the large-screen layout.
    pub fn is_large(&self) -> bool {
        self.screen == ScreenClass::Large
    }

    /// The `min-height` declaration, if any.
    pub fn min_height_declaration(&self) -> Option<String> {
        self.min_height.map(|h| format!("min-height: {h}px;"))
    }

    /// Inline style for the item container.
    pub fn container_style(&self) -> String {
        self.min_height_declaration().unwrap_or_default()
    }

    /// Per-instance style block for the item with the given DOM id.
    pub fn style_block(&self, dom_id: &str) -> Option<String> {
        self.min_height_declaration()
            .map(|decl| format!("#{dom_id} {{ {decl} }}"))
    }

    /// Inline style for the cover box.
    pub fn cover_style(&self) -> &'static str {
        match self.cover {
            CoverPlacement::Above => "width: 100%; aspect-ratio: 16 / 9;",
            CoverPlacement::Trailing => "width: 30vw; height: 16.875vw;",
        }
    }

    /// Line clamp style for a block showing `lines` lines.
    pub fn clamp_style(lines: u8) -> String {
        format!(
            "display: -webkit-box; -webkit-line-clamp: {lines}; -webkit-box-orient: vertical; overflow: hidden; line-height: 1.2;"
        )
    }

    /// Utility classes for the row holding text and cover.
    pub fn row_class(&self) -> &'static str {
        match self.screen {
            ScreenClass::Small => "flex flex-col-reverse gap-4",
            ScreenClass::Large => "flex flex-row justify-between items-start gap-6",
        }
    }

    /// Utility classes for the category label.
    pub fn category_class(&self) -> &'static str {
        match self.screen {
            ScreenClass::Small => "text-black dark:text-gray-200 text-[20px] font-normal mr-4",
            ScreenClass::Large => "text-black dark:text-gray-200 text-[32px] font-normal mr-4",
        }
    }

    /// Utility classes for the date label.
    pub fn date_class(&self) -> &'static str {
        match self.screen {
            ScreenClass::Small => "text-[#808080] text-[16px] font-normal",
            ScreenClass::Large => "text-[#808080] text-[24px] font-normal",
        }
    }

    /// Utility classes for the title link.
    pub fn title_class(&self) -> &'static str {
        match self.screen {
            ScreenClass::Small => "blog-item-title menu-link font-medium text-[24px]",
            ScreenClass::Large => "blog-item-title menu-link font-medium text-[40px]",
        }
    }

    /// Utility classes for the summary block.
    pub fn summary_class(&self) -> &'static str {
        match self.screen {
            ScreenClass::Small => "text-[#808080] font-medium text-[20px] cursor-pointer",
            ScreenClass::Large => "text-[#808080] font-medium text-[40px] mb-8 cursor-pointer",
        }
    }

    /// Utility classes for the button wrapper.
    pub fn button_wrapper_class(&self) -> &'static str {
        match self.screen {
            ScreenClass::Small => "flex justify-end -mt-9",
            ScreenClass::Large => "mt-8",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_inclusive() {
        assert_eq!(ScreenClass::from_width(1539), ScreenClass::Small);
        assert_eq!(ScreenClass::from_width(1540), ScreenClass::Large);
        assert_eq!(ScreenClass::from_width(0), ScreenClass::Small);
        assert_eq!(
            ScreenClass::from_width(DEFAULT_VIEWPORT_WIDTH),
            ScreenClass::Large
        );
    }

    #[test]
    fn test_small_screen_layout() {
        for width in [0, 320, 768, 1024, 1280, 1539] {
            let layout = blog_item_layout(width);
            assert_eq!(layout.screen, ScreenClass::Small);
            assert_eq!(layout.cover, CoverPlacement::Above);
            assert_eq!(layout.title_lines, 1);
            assert_eq!(layout.summary_lines, 1);
            assert_eq!(layout.button.width, 80);
            assert_eq!(layout.button.height, 36);
            assert_eq!(layout.min_height, None);
            assert_eq!(layout.container_style(), "");
            assert_eq!(layout.style_block("blog-item-a"), None);
        }
    }

    #[test]
    fn test_large_screen_layout() {
        let layout = blog_item_layout(1920);
        assert_eq!(layout.screen, ScreenClass::Large);
        assert_eq!(layout.cover, CoverPlacement::Trailing);
        assert_eq!(layout.title_lines, 2);
        assert_eq!(layout.summary_lines, 2);
        assert_eq!(layout.button.width, 120);
        assert_eq!(layout.button.height, 56);
        assert_eq!(layout.cover_style(), "width: 30vw; height: 16.875vw;");
    }

    #[test]
    fn test_min_height_formula() {
        for width in [1540_u32, 1600, 1920, 2560, 3840] {
            let layout = blog_item_layout(width);
            let expected = f64::from(width) * 0.3 * 9.0 / 16.0 + 128.0;
            assert_eq!(layout.min_height, Some(expected));
        }

        assert!((container_min_height(1540) - 387.875).abs() < 1e-9);
        assert!((container_min_height(1600) - 398.0).abs() < 1e-9);
        assert!((container_min_height(1920) - 452.0).abs() < 1e-9);
    }

    #[test]
    fn test_inline_style_matches_style_block() {
        let layout = blog_item_layout(2000);
        let inline = layout.container_style();
        let block = layout.style_block("blog-item-42").expect("style block");

        assert!(inline.starts_with("min-height: "));
        assert_eq!(block, format!("#blog-item-42 {{ {inline} }}"));
    }

    #[test]
    fn test_cover_height_keeps_16_9() {
        let ratio: f64 = 16.875 / 30.0;
        assert!((ratio - 9.0 / 16.0).abs() < 1e-12);
    }

    #[test]
    fn test_button_style() {
        let style = blog_item_layout(1600).button.style();
        assert_eq!(
            style,
            "width: 120px; height: 56px; font-size: 28px; border-radius: 28px;"
        );
    }

    #[test]
    fn test_label_sizes_follow_single_threshold() {
        for width in [1024_u32, 1200, 1539] {
            let layout = blog_item_layout(width);
            assert!(layout.category_class().contains("text-[20px]"), "{width}");
            assert!(layout.date_class().contains("text-[16px]"), "{width}");
        }

        let layout = blog_item_layout(1540);
        assert!(layout.category_class().contains("text-[32px]"));
        assert!(layout.date_class().contains("text-[24px]"));

        for width in [1200_u32, 1540] {
            let layout = blog_item_layout(width);
            assert!(!layout.category_class().contains("lg:"));
            assert!(!layout.date_class().contains("lg:"));
        }
    }

    #[test]
    fn test_clamp_style() {
        assert!(BlogItemLayout::clamp_style(2).contains("-webkit-line-clamp: 2;"));
    }
}
