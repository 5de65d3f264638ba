use crate::task::{Category, Priority};
use ratatui::style::Color;

// Palette (Tailwind shades the web client was styled with)
pub const ROSE_500: Color = Color::Rgb(244, 63, 94);
pub const ROSE_600: Color = Color::Rgb(225, 29, 72);
pub const AMBER_400: Color = Color::Rgb(251, 191, 36);
pub const AMBER_600: Color = Color::Rgb(217, 119, 6);
pub const BLUE_400: Color = Color::Rgb(96, 165, 250);
pub const BLUE_600: Color = Color::Rgb(37, 99, 235);
pub const GRAY_200: Color = Color::Rgb(229, 231, 235);
pub const GRAY_500: Color = Color::Rgb(107, 114, 128);
pub const SLATE_300: Color = Color::Rgb(203, 213, 225);
pub const SLATE_400: Color = Color::Rgb(148, 163, 184);
pub const SLATE_500: Color = Color::Rgb(100, 116, 139);
pub const SLATE_600: Color = Color::Rgb(71, 85, 105);
pub const SLATE_800: Color = Color::Rgb(30, 41, 59);
pub const PURPLE_600: Color = Color::Rgb(147, 51, 234);
pub const EMERALD_500: Color = Color::Rgb(16, 185, 129);
pub const EMERALD_600: Color = Color::Rgb(5, 150, 105);
pub const INDIGO_400: Color = Color::Rgb(129, 140, 248);

/// Accent colour for a priority; completed tasks use the neutral gray
#[must_use]
pub fn priority_color(priority: Priority, completed: bool) -> Color {
    if completed {
        return GRAY_200;
    }
    match priority {
        Priority::High => ROSE_500,
        Priority::Medium => AMBER_400,
        Priority::Low => BLUE_400,
    }
}

/// Colour of the priority toggle button when it is the active choice
#[must_use]
pub fn priority_toggle_color(priority: Priority) -> Color {
    match priority {
        Priority::High => ROSE_600,
        Priority::Medium => AMBER_600,
        Priority::Low => BLUE_600,
    }
}

/// Left accent bar colour, `None` when the bar is hidden (completed tasks)
#[must_use]
pub fn accent_bar_color(priority: Priority, completed: bool) -> Option<Color> {
    (!completed).then(|| priority_color(priority, completed))
}

/// Foreground colour of a category pill
#[must_use]
pub fn category_color(category: Category, completed: bool) -> Color {
    if completed {
        return SLATE_400;
    }
    match category {
        Category::General => GRAY_500,
        Category::Work => SLATE_600,
        Category::Study => PURPLE_600,
        Category::Personal => EMERALD_600,
        Category::Health => ROSE_600,
        Category::Finance => AMBER_600,
    }
}
