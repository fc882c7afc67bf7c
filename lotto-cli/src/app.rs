//! The frame loop: tick the session from wall-clock time, poll keyboard
//! input, and re-render when anything changed.

use anyhow::Result;
use chrono::Utc;
use crossterm::event::{self, Event as TermEvent, KeyEventKind};
use tokio::time::{self, Duration, MissedTickBehavior};

use lotto_core::{GameSession, BALL_COUNT};

use crate::{
    config::CliConfig,
    input::{self, KeyAction},
    terminal::Tui,
    ui,
};

pub struct App {
    pub session: GameSession,
    /// Focused pick cell, 0..6.
    pub focus: usize,
    /// Educational notice still showing.
    pub notice_open: bool,
    config: CliConfig,
    should_quit: bool,
}

impl App {
    pub fn new(config: CliConfig) -> Self {
        Self {
            session: GameSession::new(),
            focus: 0,
            notice_open: !config.skip_notice,
            config,
            should_quit: false,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<()> {
        let mut frames = time::interval(Duration::from_millis(self.config.tick_ms.max(1)));
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        ui::render(terminal, &self)?;

        loop {
            frames.tick().await;

            let mut dirty = self.session.tick(Utc::now());
            dirty |= self.drain_input()?;

            if self.should_quit {
                break;
            }
            if dirty {
                ui::render(terminal, &self)?;
            }
        }

        Ok(())
    }

    /// Consume every pending terminal event without blocking the frame.
    fn drain_input(&mut self) -> Result<bool> {
        let mut dirty = false;
        while event::poll(std::time::Duration::ZERO)? {
            match event::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    dirty |= self.apply(input::handle_key(key, self.notice_open));
                }
                TermEvent::Resize(_, _) => dirty = true,
                _ => {}
            }
        }
        Ok(dirty)
    }

    /// Apply one decoded command. Returns true if the screen needs a redraw.
    fn apply(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Quit => {
                self.should_quit = true;
                true
            }
            KeyAction::DismissNotice => {
                self.notice_open = false;
                true
            }
            KeyAction::FocusPrev => {
                self.focus = (self.focus + BALL_COUNT - 1) % BALL_COUNT;
                true
            }
            KeyAction::FocusNext => {
                self.focus = (self.focus + 1) % BALL_COUNT;
                true
            }
            KeyAction::Digit(ch) => match self.session.set_digit(self.focus, &ch.to_string()) {
                Ok(true) => {
                    // Hop to the next cell like a pin-entry form.
                    self.focus = (self.focus + 1).min(BALL_COUNT - 1);
                    true
                }
                Ok(false) => false,
                Err(err) => {
                    tracing::debug!("digit entry ignored: {err}");
                    false
                }
            },
            KeyAction::ClearDigit => matches!(self.session.set_digit(self.focus, ""), Ok(true)),
            KeyAction::StartDraw => {
                match self.session.start_draw(Utc::now(), &mut rand::thread_rng()) {
                    Ok(()) => true,
                    Err(err) => {
                        tracing::debug!("start ignored: {err}");
                        false
                    }
                }
            }
            KeyAction::None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(CliConfig {
            skip_notice: true,
            ..CliConfig::default()
        })
    }

    #[test]
    fn test_typed_digit_lands_in_focused_cell_and_advances() {
        let mut app = app();
        assert!(app.apply(KeyAction::Digit('4')));
        assert_eq!(app.session.pick().get(0), Some(4));
        assert_eq!(app.focus, 1);
    }

    #[test]
    fn test_focus_stops_at_last_cell_and_wraps_with_arrows() {
        let mut app = app();
        for ch in ['1', '2', '3', '4', '5', '6', '7'] {
            app.apply(KeyAction::Digit(ch));
        }
        assert_eq!(app.focus, BALL_COUNT - 1);

        app.apply(KeyAction::FocusNext);
        assert_eq!(app.focus, 0);
        app.apply(KeyAction::FocusPrev);
        assert_eq!(app.focus, BALL_COUNT - 1);
    }

    #[test]
    fn test_clear_digit_empties_focused_cell() {
        let mut app = app();
        app.apply(KeyAction::Digit('9'));
        app.apply(KeyAction::FocusPrev);
        assert!(app.apply(KeyAction::ClearDigit));
        assert_eq!(app.session.pick().get(0), None);
    }

    #[test]
    fn test_start_then_start_again_is_ignored() {
        let mut app = app();
        assert!(app.apply(KeyAction::StartDraw));
        assert!(!app.apply(KeyAction::StartDraw));
    }

    #[test]
    fn test_notice_dismissal() {
        let mut app = App::new(CliConfig::default());
        assert!(app.notice_open);
        assert!(app.apply(KeyAction::DismissNotice));
        assert!(!app.notice_open);
    }
}
