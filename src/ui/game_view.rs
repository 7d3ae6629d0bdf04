use crate::game::{Cell, GameSnapshot, GameStatus, Player, BOARD_SIZE};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::{Message, Tone};

/// Width of one cell's text, e.g. `[H 12]`.
const CELL_WIDTH: usize = 6;

pub(crate) fn render(
    frame: &mut Frame,
    snapshot: &GameSnapshot,
    input: &str,
    message: &Option<Message>,
    thinking: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),                      // Header
            Constraint::Min(2 * BOARD_SIZE as u16 + 1), // Board
            Constraint::Length(3),                      // Message
            Constraint::Length(3),                      // Input
            Constraint::Length(3),                      // Controls
        ])
        .split(frame.area());

    render_header(frame, snapshot, chunks[0]);
    render_board(frame, &snapshot.cells, chunks[1]);
    render_message(frame, message, thinking, chunks[2]);
    render_input(frame, snapshot, input, chunks[3]);
    render_controls(frame, chunks[4]);
}

pub(crate) fn player_color(player: Player) -> Color {
    match player {
        Player::Human => Color::Red,
        Player::Computer => Color::Blue,
    }
}

fn render_header(frame: &mut Frame, snapshot: &GameSnapshot, area: Rect) {
    let turn_line = match snapshot.status {
        GameStatus::AwaitingMove(player) => Line::styled(
            format!("{}'s turn", player.name()),
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        ),
        _ => Line::from("Game Over"),
    };
    let lines = vec![
        Line::styled(
            format!("Active Factor: {}", snapshot.active_factor),
            Style::default().fg(Color::Yellow),
        ),
        turn_line,
    ];

    let header = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title("MULTIPLICATION GAME")
            .title_alignment(Alignment::Center)
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    );

    frame.render_widget(header, area);
}

fn cell_span(cell: Cell) -> Span<'static> {
    match cell.owner.player() {
        Some(player) => Span::styled(
            format!("[{}{:>3}]", player.tag(), cell.value),
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        ),
        None => Span::raw(format!("  {:>3} ", cell.value)),
    }
}

fn rule(left: &str, mid: &str, right: &str) -> Line<'static> {
    let segments = vec!["─".repeat(CELL_WIDTH); BOARD_SIZE];
    Line::from(format!("{left}{}{right}", segments.join(mid)))
}

fn render_board(frame: &mut Frame, cells: &[[Cell; BOARD_SIZE]; BOARD_SIZE], area: Rect) {
    let mut lines = Vec::with_capacity(2 * BOARD_SIZE + 1);
    lines.push(rule("┌", "┬", "┐"));

    for (i, row) in cells.iter().enumerate() {
        let mut spans = vec![Span::raw("│")];
        for cell in row {
            spans.push(cell_span(*cell));
            spans.push(Span::raw("│"));
        }
        lines.push(Line::from(spans));

        if i + 1 < BOARD_SIZE {
            lines.push(rule("├", "┼", "┤"));
        }
    }
    lines.push(rule("└", "┴", "┘"));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<Message>, thinking: bool, area: Rect) {
    let (text, color) = if thinking {
        ("Computer is thinking...", Color::Blue)
    } else {
        match message {
            Some(m) => (m.text.as_str(), tone_color(m.tone)),
            None => ("", Color::Yellow),
        }
    };
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

pub(crate) fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Info => Color::Yellow,
        Tone::Success => Color::Green,
        Tone::Error => Color::Red,
        Tone::Computer => Color::Blue,
    }
}

fn render_input(frame: &mut Frame, snapshot: &GameSnapshot, input: &str, area: Rect) {
    let line = if snapshot.status == GameStatus::AwaitingMove(Player::Human) {
        Line::from(vec![
            Span::styled("Enter factor (1-9): ", Style::default().fg(Color::White)),
            Span::styled(
                format!("{input}_"),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from("")
    };
    let widget = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("0-9: Factor  |  Enter: Move  |  Backspace: Edit  |  S: Save  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}

/// Centered box announcing how the game ended.
pub(crate) fn render_game_over(frame: &mut Frame, status: GameStatus) {
    let (headline, detail, color) = match status {
        GameStatus::Won(Player::Human) => (">>> HUMAN WINS! <<<", "(You got 4 in a row)", Color::Green),
        GameStatus::Won(Player::Computer) => {
            (">>> COMPUTER WINS! <<<", "(Computer got 4 in a row)", Color::Red)
        }
        GameStatus::Draw => (">>> DRAW! <<<", "(Neither player can move)", Color::Yellow),
        GameStatus::Quit | GameStatus::AwaitingMove(_) => {
            (">>> GAME EXITED <<<", "(Returned to Main Menu)", Color::Yellow)
        }
    };

    let area = centered(frame.area(), 34, 7);
    let lines = vec![
        Line::from(""),
        Line::styled(headline, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Line::from(detail),
        Line::from(""),
        Line::styled("Press any key to continue", Style::default().fg(Color::Yellow)),
    ];
    let popup = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    rect
}
