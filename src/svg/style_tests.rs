//! Tests for SVG styling primitives.

use super::*;

mod palette_tests {
    use super::*;

    #[test]
    fn get_color_starts_with_blue_and_red() {
        assert_eq!(get_color(0), "#3b82f6");
        assert_eq!(get_color(1), "#ef4444");
    }

    #[test]
    fn get_color_cycles() {
        assert_eq!(get_color(8), "#3b82f6");
        for i in 0..40 {
            assert_eq!(get_color(i), get_color(i + PALETTE.len()));
            assert_eq!(get_color(i), get_color(i % PALETTE.len()));
        }
    }

    #[test]
    fn default_colors_are_first_five_palette_entries() {
        let colors = default_colors();
        assert_eq!(colors.len(), 5);
        assert_eq!(colors[4], "#8b5cf6");
    }

    #[test]
    fn pick_color_cycles_custom_colors() {
        let colors = vec!["#111".to_string(), "#222".to_string()];
        assert_eq!(pick_color(&colors, 3).to_css(), "#222");
    }

    #[test]
    fn pick_color_falls_back_to_palette() {
        assert_eq!(pick_color(&[], 2).to_css(), "#10b981");
    }
}

mod chart_color_tests {
    use super::*;

    #[test]
    fn css_var_format_includes_fallback() {
        let color = ChartColor::css_var("text-muted", "#6b7280");
        assert_eq!(color.to_css(), "var(--color-text-muted, #6b7280)");
    }

    #[test]
    fn hex_format() {
        let color = ChartColor::hex("#22c55e");
        assert_eq!(color.to_css(), "#22c55e");
        assert_eq!(color.to_string(), "#22c55e");
    }

    #[test]
    fn display_escapes_attribute_text() {
        let color = ChartColor::hex("red\" onload=\"x");
        assert_eq!(color.to_css(), "red\" onload=\"x");
        assert_eq!(color.to_string(), "red&quot; onload=&quot;x");
    }

    #[test]
    fn gradient_reference_is_unchanged() {
        assert_eq!(ChartColor::hex("url(#chart-area-0)").to_string(), "url(#chart-area-0)");
    }
}

mod text_anchor_tests {
    use super::*;

    #[test]
    fn display_formats() {
        assert_eq!(format!("{}", TextAnchor::Middle), "middle");
        assert_eq!(format!("{}", TextAnchor::End), "end");
    }
}
