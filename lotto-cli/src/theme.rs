//! Terminal styling for the digit-color table and the ball row.

use lotto_core::DigitColor;
use ratatui::style::{Color, Modifier, Style};

pub fn digit_color(color: DigitColor) -> Color {
    match color {
        DigitColor::Black => Color::Black,
        DigitColor::Red => Color::Red,
        DigitColor::Blue => Color::Blue,
        DigitColor::Green => Color::Green,
        DigitColor::Yellow => Color::Yellow,
        DigitColor::Purple => Color::Magenta,
        DigitColor::Orange => Color::Rgb(255, 165, 0),
        DigitColor::Pink => Color::Rgb(255, 105, 180),
        DigitColor::Brown => Color::Rgb(139, 69, 19),
        DigitColor::Gray => Color::Gray,
    }
}

pub fn digit_style(digit: u8) -> Style {
    Style::default().fg(digit_color(DigitColor::for_digit(digit)))
}

/// A ball that has been revealed: digit color on the bright "ball" backdrop.
pub fn revealed_ball_style(digit: u8) -> Style {
    digit_style(digit)
        .bg(Color::LightYellow)
        .add_modifier(Modifier::BOLD)
}

/// A ball still showing "?".
pub fn hidden_ball_style() -> Style {
    Style::default().fg(Color::DarkGray)
}
