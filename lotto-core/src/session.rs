use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{prize, DrawnNumbers, LottoError, Result, UserPick, BALL_COUNT};

const COUNTDOWN_START: u8 = 9;
const COUNTDOWN_STEP_MS: i64 = 1000;
const REVEAL_PAUSE_MS: i64 = 1000;
const REVEAL_STRIDE_MS: i64 = 800;
const SCORING_PAUSE_MS: i64 = 1000;

/// Phase of one draw.
///
/// The original page drove this sequence with nested timeouts; here it is an
/// explicit machine advanced by [`GameSession::tick`], so tests can run it on
/// synthetic timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No draw yet.
    Idle,
    /// Counting down, one step per second. Inputs stay editable here; the
    /// window exists so the player can reconsider the pick.
    Countdown { remaining: u8 },
    /// Fixed one-second beat between the countdown hitting 0 and the first
    /// ball. The pick is locked and snapshotted on entry.
    Pausing,
    /// Balls up to `next` are shown; `next` is the one revealed at the
    /// current deadline.
    Revealing { next: usize },
    /// All balls shown, waiting one second before scoring.
    ScoringPause,
    /// Result message set. A new draw may start.
    Scored,
}

/// One player's lottery session: the live pick, the current draw, and the
/// phase machine that sequences countdown, reveal, and scoring.
#[derive(Debug, Clone)]
pub struct GameSession {
    pick: UserPick,
    /// Pick as captured when the countdown completed; scoring reads this, so
    /// nothing the player does after the lock can change the result.
    snapshot: UserPick,
    drawn: Option<DrawnNumbers>,
    revealed: [bool; BALL_COUNT],
    phase: Phase,
    deadline: Option<DateTime<Utc>>,
    message: Option<&'static str>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            pick: UserPick::new(),
            snapshot: UserPick::new(),
            drawn: None,
            revealed: [false; BALL_COUNT],
            phase: Phase::Idle,
            deadline: None,
            message: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pick(&self) -> &UserPick {
        &self.pick
    }

    /// Countdown value to display, while one is showing.
    pub fn countdown(&self) -> Option<u8> {
        match self.phase {
            Phase::Countdown { remaining } => Some(remaining),
            Phase::Pausing => Some(0),
            _ => None,
        }
    }

    /// True from the first ball through scoring.
    pub fn is_revealing(&self) -> bool {
        matches!(self.phase, Phase::Revealing { .. } | Phase::ScoringPause)
    }

    /// True whenever digit entry is rejected.
    pub fn inputs_locked(&self) -> bool {
        matches!(
            self.phase,
            Phase::Pausing | Phase::Revealing { .. } | Phase::ScoringPause
        )
    }

    pub fn can_start(&self) -> bool {
        matches!(self.phase, Phase::Idle | Phase::Scored)
    }

    pub fn revealed(&self) -> &[bool; BALL_COUNT] {
        &self.revealed
    }

    /// Drawn digit at `position`, once that ball has been revealed.
    pub fn ball(&self, position: usize) -> Option<u8> {
        if *self.revealed.get(position)? {
            self.drawn.as_ref()?.get(position)
        } else {
            None
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        self.message
    }

    /// Apply raw text input to one pick slot.
    ///
    /// Rejected outright once the draw is locked; otherwise filtered the way
    /// [`UserPick::set_digit`] filters.
    pub fn set_digit(&mut self, position: usize, raw: &str) -> Result<bool> {
        if self.inputs_locked() {
            return Err(LottoError::InputsLocked);
        }
        self.pick.set_digit(position, raw)
    }

    /// Begin a draw at `now`: generate seven fresh digits, clear the reveal
    /// and result state, and start the countdown.
    pub fn start_draw<R: Rng>(&mut self, now: DateTime<Utc>, rng: &mut R) -> Result<()> {
        if !self.can_start() {
            return Err(LottoError::DrawInProgress);
        }

        self.drawn = Some(DrawnNumbers::generate(rng));
        self.revealed = [false; BALL_COUNT];
        self.message = None;
        self.snapshot = self.pick.clone();
        self.phase = Phase::Countdown {
            remaining: COUNTDOWN_START,
        };
        self.deadline = Some(now + Duration::milliseconds(COUNTDOWN_STEP_MS));

        tracing::info!("draw started, counting down from {COUNTDOWN_START}");
        Ok(())
    }

    /// Advance the machine up to `now`, firing every transition whose
    /// deadline has passed. Returns true if anything changed.
    ///
    /// Transitions fire off the stored deadline rather than `now`, so a
    /// late tick cannot stretch the schedule.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        let mut changed = false;
        while let Some(deadline) = self.deadline {
            if now < deadline {
                break;
            }
            self.advance(deadline);
            changed = true;
        }
        changed
    }

    fn advance(&mut self, base: DateTime<Utc>) {
        match self.phase {
            Phase::Countdown { remaining } => {
                let remaining = remaining.saturating_sub(1);
                if remaining == 0 {
                    // Lock the pick in; scoring reads this snapshot.
                    self.snapshot = self.pick.clone();
                    self.phase = Phase::Pausing;
                    self.deadline = Some(base + Duration::milliseconds(REVEAL_PAUSE_MS));
                } else {
                    self.phase = Phase::Countdown { remaining };
                    self.deadline = Some(base + Duration::milliseconds(COUNTDOWN_STEP_MS));
                }
            }
            Phase::Pausing => {
                self.phase = Phase::Revealing { next: 0 };
                // Ball 0 reveals immediately at the start of the phase.
                self.deadline = Some(base);
            }
            Phase::Revealing { next } => {
                self.revealed[next] = true;
                tracing::debug!("revealed ball {next}");

                if next + 1 == BALL_COUNT {
                    self.phase = Phase::ScoringPause;
                    self.deadline = Some(base + Duration::milliseconds(SCORING_PAUSE_MS));
                } else {
                    self.phase = Phase::Revealing { next: next + 1 };
                    self.deadline = Some(base + Duration::milliseconds(REVEAL_STRIDE_MS));
                }
            }
            Phase::ScoringPause => {
                let drawn = self
                    .drawn
                    .unwrap_or_else(|| DrawnNumbers::from_digits([0; BALL_COUNT]));
                let matches = prize::match_count(&self.snapshot, &drawn);
                self.message = Some(prize::prize_message(matches));
                self.phase = Phase::Scored;
                self.deadline = None;

                tracing::info!("draw scored with {matches} matching digits");
            }
            Phase::Idle | Phase::Scored => {
                self.deadline = None;
            }
        }
    }
}
