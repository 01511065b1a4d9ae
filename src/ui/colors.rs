use ratatui::style::Color;

// Console palette
pub const ACCENT: Color = Color::Rgb(0, 255, 65); // neon green
pub const SOFT_ACCENT: Color = Color::Rgb(110, 220, 140);
pub const WARN: Color = Color::Rgb(255, 200, 80); // amber
pub const ERROR_RED: Color = Color::Rgb(255, 90, 90);
pub const TEXT_PRIMARY: Color = Color::Rgb(230, 230, 230);
pub const TEXT_SECONDARY: Color = Color::Rgb(160, 170, 160);
pub const TEXT_DIM: Color = Color::Rgb(95, 105, 95);
pub const HIGHLIGHT_BG: Color = Color::Rgb(20, 60, 30);
