use crate::game::{Game, GameState, PlayerId};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::{board_lines, player_color};

pub fn render(
    frame: &mut Frame,
    game: &Game,
    selected_column: usize,
    to_move: PlayerId,
    message: &Option<String>,
) {
    let rows = game.board().rows() as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(rows + 4), // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game, to_move, chunks[0]);
    render_board(frame, game, selected_column, to_move, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, game, chunks[3]);
}

fn render_header(frame: &mut Frame, game: &Game, to_move: PlayerId, area: Rect) {
    let color = match game.winning_player() {
        Ok(winner) => player_color(winner),
        Err(_) => player_color(to_move),
    };
    let config = game.config();
    let title = format!(
        "Connect {} ({}x{}, {} players)",
        config.winning_count, config.columns, config.rows, config.player_count
    );

    let header = Paragraph::new(game.status().to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    game: &Game,
    selected_column: usize,
    to_move: PlayerId,
    area: Rect,
) {
    let columns = game.board().columns();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..columns {
        if col == selected_column {
            col_line.push(Span::styled(
                format!("{:^3}", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!("{:^3}", col + 1)));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    let rule = "═".repeat(columns * 3 + 1);
    lines.push(Line::from(format!("  ╔{}╗", rule)));

    for row in board_lines(game.board()) {
        let mut spans = vec![Span::raw("  ║")];
        spans.extend(row.spans);
        spans.push(Span::raw(" ║"));
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(format!("  ╚{}╝", rule)));

    // Selection indicator in the color of the player to move
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..columns {
        if col == selected_column && game.state() != GameState::Finished {
            indicator_line.push(Span::styled(
                " ▲ ",
                Style::default().fg(player_color(to_move)),
            ));
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

fn render_controls(frame: &mut Frame, game: &Game, area: Rect) {
    let line = if game.state() == GameState::NotStarted {
        "←/→: Move  |  Enter: Drop  |  Tab: Opening player  |  R: Restart  |  Q: Quit"
    } else {
        "←/→: Move  |  Enter: Drop  |  R: Restart  |  Q: Quit"
    };

    let controls = Paragraph::new(Line::from(line))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
