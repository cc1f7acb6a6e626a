pub mod layout;
mod menu;
mod practice;

pub use menu::draw_menu;
pub use practice::{draw_practice, draw_quit_confirmation};

use ratatui::style::Color;

/// Maps the `accent_color` settings value to a terminal color. Unknown
/// names fall back to cyan, the default theme.
pub fn accent_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "cyan" => Color::Cyan,
        "blue" => Color::Blue,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "magenta" => Color::Magenta,
        "red" => Color::Red,
        "white" => Color::White,
        _ => Color::Cyan,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_color_known_names() {
        assert_eq!(accent_color("yellow"), Color::Yellow);
        assert_eq!(accent_color("GREEN"), Color::Green);
    }

    #[test]
    fn test_accent_color_unknown_falls_back() {
        assert_eq!(accent_color("mauve"), Color::Cyan);
    }
}
