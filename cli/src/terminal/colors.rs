use colored::Color;

pub const PRIMARY: Color = Color::BrightCyan;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;

pub const HINT_HIGH: Color = Color::TrueColor { r: 255, g: 165, b: 0 };
pub const HINT_LOW: Color = Color::BrightBlue;
pub const WIN: Color = Color::BrightGreen;
pub const LOSS: Color = Color::BrightRed;
pub const LIMIT: Color = Color::Red;

/// Menu colors, in the same order as `Difficulty::ALL`.
pub const DIFFICULTY: [Color; 3] = [Color::Green, HINT_HIGH, Color::Red];
