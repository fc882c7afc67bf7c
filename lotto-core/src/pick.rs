use serde::{Deserialize, Serialize};

use crate::{LottoError, Result, BALL_COUNT};

/// The player's seven picked slots. Each slot is empty or a single digit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPick {
    slots: [Option<u8>; BALL_COUNT],
}

impl UserPick {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply raw text input to one slot.
    ///
    /// Accepts the empty string (clears the slot) or exactly one decimal
    /// digit. Anything else is filtered out: the slot keeps its prior value
    /// and `Ok(false)` is returned, with no error surfaced to the player.
    pub fn set_digit(&mut self, position: usize, raw: &str) -> Result<bool> {
        if position >= BALL_COUNT {
            return Err(LottoError::PositionOutOfRange(position));
        }

        if raw.is_empty() {
            self.slots[position] = None;
            return Ok(true);
        }

        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if ch.is_ascii_digit() => {
                self.slots[position] = Some(ch as u8 - b'0');
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    pub fn get(&self, position: usize) -> Option<u8> {
        self.slots.get(position).copied().flatten()
    }

    pub fn slots(&self) -> &[Option<u8>; BALL_COUNT] {
        &self.slots
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}
