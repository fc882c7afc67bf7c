//! Game logic for a seven-digit lottery simulation.
//!
//! The player picks seven digits, a draw generates seven random digits, and
//! after a countdown the balls are revealed one at a time before the match
//! count is scored against a fixed prize table. Everything here is
//! deterministic given a clock value and an RNG; rendering and wall-clock
//! time live in the frontend.

pub mod draw;
pub mod error;
pub mod pick;
pub mod prize;
pub mod session;

pub use draw::{DigitColor, DrawnNumbers};
pub use error::{LottoError, Result};
pub use pick::UserPick;
pub use prize::{match_count, prize_message};
pub use session::{GameSession, Phase};

/// Every sequence in the game has exactly seven positions.
pub const BALL_COUNT: usize = 7;
