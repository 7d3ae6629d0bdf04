use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{Message, MenuItem};
use super::game_view::{centered, tone_color};

const RULES: [&str; 9] = [
    "1. The board contains numbers which are products of factors 1-9.",
    "2. Players (Human [H] vs Computer [C]) take turns.",
    "3. On your turn, choose a factor (1-9).",
    "4. Multiply your chosen factor by the current 'Active Factor'.",
    "5. Find the resulting product on the board and mark it [H] or [C].",
    "   (You can only mark numbers that haven't been marked yet).",
    "6. Your chosen factor becomes the new 'Active Factor' for the opponent.",
    "7. The first player to get 4 of their marks in a row (horizontally,",
    "   vertically, or diagonally) WINS!",
];

pub(crate) fn render_menu(frame: &mut Frame, selected: usize, message: &Option<Message>) {
    let mut lines = vec![Line::from("")];
    for (i, item) in MenuItem::ALL.iter().enumerate() {
        if i == selected {
            lines.push(Line::styled(
                format!(" > {:<12}", item.label()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::REVERSED | Modifier::BOLD),
            ));
        } else {
            lines.push(Line::styled(
                format!("   {:<12}", item.label()),
                Style::default().fg(Color::Yellow),
            ));
        }
    }

    let area = centered(frame.area(), 30, MenuItem::ALL.len() as u16 + 4);
    let menu = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title("- MAIN MENU -")
            .title_alignment(Alignment::Center)
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    );
    frame.render_widget(menu, area);

    if let Some(m) = message {
        let full = frame.area();
        let below = ratatui::layout::Rect {
            y: (area.y + area.height + 1).min(full.height.saturating_sub(1)),
            height: 1,
            ..full
        };
        let widget = Paragraph::new(m.text.as_str())
            .style(Style::default().fg(tone_color(m.tone)).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(widget, below);
    }
}

pub(crate) fn render_instructions(frame: &mut Frame) {
    let mut lines = vec![Line::from("")];
    lines.extend(
        RULES
            .iter()
            .map(|rule| Line::styled(*rule, Style::default().fg(Color::White))),
    );
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Press any key to return...",
        Style::default().fg(Color::Yellow),
    ));

    let area = centered(frame.area(), 76, RULES.len() as u16 + 5);
    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("-- HOW TO PLAY --")
            .title_alignment(Alignment::Center)
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    );
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_menu_lists_every_item() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| render_menu(f, 1, &None)).unwrap();
        let text = screen(&terminal);
        for item in MenuItem::ALL {
            assert!(text.contains(item.label()), "missing {}", item.label());
        }
        assert!(text.contains("> Load Game"));
    }

    #[test]
    fn test_instructions_mention_winning() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(render_instructions).unwrap();
        assert!(screen(&terminal).contains("WINS!"));
    }
}
