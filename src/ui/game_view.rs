use crate::game::{Board, Cell, GameOutcome, GameState, Player, Position, WinSet};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: &Option<String>,
) {
    let board_height = game_state.dimensions().rows as u16 + 4;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Header
            Constraint::Min(board_height), // Board
            Constraint::Length(3),         // Message
            Constraint::Length(3),         // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, chunks[0]);
    render_board(
        frame,
        game_state.board(),
        game_state.win_set(),
        selected_column,
        chunks[1],
    );
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, game_state: &GameState, area: Rect) {
    let (status, color) = match (game_state.winner(), game_state.current_player()) {
        (Some(GameOutcome::Winner(player)), _) => (
            format!("Game Over  |  {} wins", player.name()),
            player_color(player),
        ),
        (Some(GameOutcome::Tie), _) => ("Game Over  |  Tie".to_string(), Color::White),
        (None, Some(player)) => (
            format!(
                "Current Player: {}  |  Move {}",
                player.name(),
                game_state.play_history().len() + 1
            ),
            player_color(player),
        ),
        (None, None) => (String::new(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    win_set: &WinSet,
    selected_column: usize,
    area: Rect,
) {
    let columns = board.columns();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..columns {
        let label = format!("{:^3}", col);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let rule = "═".repeat(columns * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for (row, cells) in board.row_major().enumerate() {
        let mut row_spans = vec![Span::raw("  ║")];

        for (col, &cell) in cells.iter().enumerate() {
            let (symbol, color) = match cell {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::PlayerOne => (" ● ", player_color(Player::One)),
                Cell::PlayerTwo => (" ● ", player_color(Player::Two)),
            };
            let mut style = Style::default().fg(color);
            if win_set.contains(&Position::new(row, col)) {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            row_spans.push(Span::styled(symbol, style));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..columns {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(Line::from(
        "←/→: Move  |  Enter: Drop  |  R: Restart  |  Q: Quit",
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Controls"),
    );

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Dimensions;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(state: &GameState, message: Option<String>) -> String {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, state, 2, &message)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_header_shows_current_player() {
        let state = GameState::new(Dimensions::new(5, 4));
        let screen = draw(&state, None);
        assert!(screen.contains("Current Player: Player 1"));
    }

    #[test]
    fn test_header_shows_winner_and_message() {
        let mut state = GameState::new(Dimensions::new(5, 4));
        for col in [0, 1, 0, 1, 0, 1, 0] {
            state.play(col).unwrap();
        }
        let screen = draw(&state, Some("Player 1 wins!".to_string()));
        assert!(screen.contains("Game Over  |  Player 1 wins"));
        assert!(screen.contains("Player 1 wins!"));
    }
}
