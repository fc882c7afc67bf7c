//! Single-page rendering: notice overlay, ball row, pick cells, and the
//! countdown/result lines.

use anyhow::Result;
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use lotto_core::BALL_COUNT;

use crate::{app::App, terminal::Tui, theme};

pub fn render(terminal: &mut Tui, app: &App) -> Result<()> {
    terminal.draw(|frame| {
        if app.notice_open {
            render_notice(frame);
        } else {
            render_game(frame, app);
        }
    })?;
    Ok(())
}

fn render_game(frame: &mut Frame, app: &App) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .title(" Terminal Lottery ");
    let inner = outer.inner(frame.area());
    frame.render_widget(outer, frame.area());

    let rows = Layout::vertical([
        Constraint::Length(1), // subtitle
        Constraint::Length(1), // countdown / revealing line
        Constraint::Length(3), // balls
        Constraint::Length(1), // start control
        Constraint::Length(1), // pick header
        Constraint::Length(3), // pick cells
        Constraint::Length(1), // result line
        Constraint::Min(0),
        Constraint::Length(1), // key help
    ])
    .split(inner);

    frame.render_widget(
        Paragraph::new("Educational Simulation Only - No Real Money Involved")
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center),
        rows[0],
    );

    frame.render_widget(
        Paragraph::new(status_line(app)).alignment(Alignment::Center),
        rows[1],
    );

    render_balls(frame, rows[2], app);

    let session = &app.session;
    let caption = if session.is_revealing() {
        "[ Revealing... ]"
    } else {
        "[ Start Lottery ]"
    };
    let button_style = if session.can_start() {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };
    frame.render_widget(
        Paragraph::new(caption)
            .style(button_style)
            .alignment(Alignment::Center),
        rows[3],
    );

    frame.render_widget(
        Paragraph::new("Choose Your Lucky Numbers").alignment(Alignment::Center),
        rows[4],
    );

    render_pick_cells(frame, rows[5], app);

    frame.render_widget(
        Paragraph::new(session.message().unwrap_or(""))
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        rows[6],
    );

    frame.render_widget(
        Paragraph::new("0-9 digit | Backspace clear | </> move | Enter start | q quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        rows[8],
    );
}

fn status_line(app: &App) -> Line<'static> {
    let session = &app.session;
    if let Some(n) = session.countdown() {
        Line::from(format!("End to Change Your Mind {n}"))
    } else if session.is_revealing() {
        Line::styled(
            "Revealing Numbers...",
            Style::default().fg(Color::Yellow),
        )
    } else {
        Line::from("")
    }
}

fn render_balls(frame: &mut Frame, area: Rect, app: &App) {
    let cells = Layout::horizontal([Constraint::Length(5); BALL_COUNT])
        .flex(Flex::Center)
        .split(area);

    for (i, cell) in cells.iter().enumerate() {
        let (text, style) = match app.session.ball(i) {
            Some(digit) => (digit.to_string(), theme::revealed_ball_style(digit)),
            None => ("?".to_string(), theme::hidden_ball_style()),
        };

        let border = if app.session.revealed()[i] {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        frame.render_widget(
            Paragraph::new(text)
                .style(style)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).border_style(border)),
            *cell,
        );
    }
}

fn render_pick_cells(frame: &mut Frame, area: Rect, app: &App) {
    let locked = app.session.inputs_locked();
    let cells = Layout::horizontal([Constraint::Length(5); BALL_COUNT])
        .flex(Flex::Center)
        .split(area);

    for (i, cell) in cells.iter().enumerate() {
        let (text, mut style) = match app.session.pick().get(i) {
            Some(digit) => (digit.to_string(), theme::digit_style(digit)),
            None => (" ".to_string(), Style::default()),
        };
        if locked {
            style = style.add_modifier(Modifier::DIM);
        }

        let border = if locked {
            Style::default().fg(Color::DarkGray)
        } else if i == app.focus {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        frame.render_widget(
            Paragraph::new(text)
                .style(style)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).border_style(border)),
            *cell,
        );
    }
}

fn render_notice(frame: &mut Frame) {
    let area = centered_rect(70, 60, frame.area());
    frame.render_widget(Clear, area);

    let warn = Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(""),
        Line::styled("NO REAL MONEY INVOLVED", warn),
        Line::styled("NOT REAL GAMBLING", warn),
        Line::styled("FOR EDUCATIONAL PURPOSES ONLY", warn),
        Line::styled("AGE 18+ ONLY", warn),
        Line::from(""),
        Line::from("This game demonstrates programming concepts and game mechanics."),
        Line::from("All monetary values are fictional and for educational purposes only."),
        Line::from(""),
        Line::styled(
            "Press Enter to continue",
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" WARNING: EDUCATIONAL SOFTWARE ONLY "),
            ),
        area,
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vertical[1])[1]
}
