use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::BALL_COUNT;

/// One set of seven drawn digits, fixed for the lifetime of a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawnNumbers {
    digits: [u8; BALL_COUNT],
}

impl DrawnNumbers {
    /// Draw seven independent uniform digits in 0..=9.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let mut digits = [0u8; BALL_COUNT];
        for digit in &mut digits {
            *digit = rng.gen_range(0..=9);
        }
        Self { digits }
    }

    /// A fixed set of digits, for tests and replays.
    pub fn from_digits(digits: [u8; BALL_COUNT]) -> Self {
        debug_assert!(digits.iter().all(|d| *d <= 9));
        Self { digits }
    }

    pub fn digits(&self) -> &[u8; BALL_COUNT] {
        &self.digits
    }

    pub fn get(&self, position: usize) -> Option<u8> {
        self.digits.get(position).copied()
    }
}

/// Deterministic presentation color for a digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DigitColor {
    Black,
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
    Pink,
    Brown,
    Gray,
}

impl DigitColor {
    pub fn for_digit(digit: u8) -> Self {
        match digit {
            1 => Self::Red,
            2 => Self::Blue,
            3 => Self::Green,
            4 => Self::Yellow,
            5 => Self::Purple,
            6 => Self::Orange,
            7 => Self::Pink,
            8 => Self::Brown,
            9 => Self::Gray,
            // 0 and anything out of range
            _ => Self::Black,
        }
    }
}
