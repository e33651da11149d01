//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{CueSink, GameStatus, NotificationKind, Player, Position, Session, Square};

use super::app::App;

const HELP: &str = "arrows move · enter/1-9 play · n new game · r reset score · m mute · esc dismiss · q quit";

/// Renders the whole screen.
pub fn draw<C: CueSink>(frame: &mut Frame, app: &App<C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title / notification
            Constraint::Length(3), // Turn
            Constraint::Length(3), // Score
            Constraint::Min(11),   // Board
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    draw_banner(frame, chunks[0], app);
    draw_turn(frame, chunks[1], app.controller().session());
    draw_score(frame, chunks[2], app);
    draw_board(frame, chunks[3], app.controller().session(), app.cursor());

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_banner<C: CueSink>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let banner = match app.notification() {
        Some(note) => {
            let color = match note.kind() {
                NotificationKind::Success => Color::Green,
                NotificationKind::Warning => Color::Yellow,
            };
            Paragraph::new(note.text().to_string())
                .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
                .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(color)))
        }
        None => Paragraph::new("Tic Tac Toe")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    };
    frame.render_widget(banner.alignment(Alignment::Center), area);
}

fn draw_turn(frame: &mut Frame, area: Rect, session: &Session) {
    let text = match session.status() {
        GameStatus::InProgress => format!("Player {}'s turn", session.active_player()),
        GameStatus::Won { winner, .. } => format!("Player {} wins! Press n for a new game", winner),
        GameStatus::Drawn => "It's a draw! Press n for a new game".to_string(),
    };
    let turn = Paragraph::new(Line::from(Span::styled(text, player_style(session.active_player()))))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(turn, area);
}

fn draw_score<C: CueSink>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let score = app.controller().score();
    let sound = if app.controller().is_muted() { "muted" } else { "sound on" };
    let line = Line::from(vec![
        Span::styled(format!("Player X: {}", score.x()), player_style(Player::X)),
        Span::raw("   "),
        Span::styled(format!("Player O: {}", score.o()), player_style(Player::O)),
        Span::raw("   "),
        Span::styled(format!("Draws: {}", score.draws()), Style::default().fg(Color::Yellow)),
        Span::raw("   "),
        Span::styled(sound, Style::default().fg(Color::DarkGray)),
    ]);
    let panel = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().title("Score").borders(Borders::ALL));
    frame.render_widget(panel, area);
}

fn draw_board(frame: &mut Frame, area: Rect, session: &Session, cursor: Position) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (n, row) in Position::ALL.chunks(3).enumerate() {
        draw_row(frame, rows[n * 2], session, cursor, row);
        if n < 2 {
            draw_separator(frame, rows[n * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, session: &Session, cursor: Position, positions: &[Position]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (n, pos) in positions.iter().enumerate() {
        draw_cell(frame, cols[n * 2], session, cursor, *pos);
        if n < 2 {
            draw_separator_vertical(frame, cols[n * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, session: &Session, cursor: Position, pos: Position) {
    let (symbol, base_style) = match session.board().get(pos) {
        Square::Empty => (format!(" {} ", pos.to_index() + 1), Style::default().fg(Color::DarkGray)),
        Square::Occupied(player) => (format!(" {} ", player), player_style(player).add_modifier(Modifier::BOLD)),
    };

    let winning = session
        .status()
        .winning_line()
        .is_some_and(|line| line.contains(&pos));

    let style = if pos == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else if winning {
        base_style.bg(Color::Green)
    } else if session.status().is_over() {
        base_style.add_modifier(Modifier::DIM)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn player_style(player: Player) -> Style {
    match player {
        Player::X => Style::default().fg(Color::Blue),
        Player::O => Style::default().fg(Color::Red),
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
