use ratatui::style::Color;

// Backgrounds
pub const BG_DARK: Color = Color::Rgb(13, 17, 23);
pub const BG_BAR: Color = Color::Rgb(22, 27, 34);
pub const BG_HIGHLIGHT: Color = Color::Rgb(33, 38, 45);

// Primary accent
pub const ACCENT: Color = Color::Rgb(88, 166, 255);

// Text
pub const TEXT: Color = Color::Rgb(230, 237, 243);
pub const TEXT_DIM: Color = Color::Rgb(139, 148, 158);
pub const TEXT_MUTED: Color = Color::Rgb(87, 96, 106);

// Semantic
pub const GREEN: Color = Color::Rgb(63, 185, 80);
pub const RED: Color = Color::Rgb(248, 81, 73);
pub const YELLOW: Color = Color::Rgb(210, 153, 34);
pub const PURPLE: Color = Color::Rgb(188, 140, 255);
