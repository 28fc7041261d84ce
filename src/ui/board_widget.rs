use crate::game::{Board, PlayerId};
use crossterm::style::Color as AnsiColor;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// Piece colors by player index for the TUI and for ANSI text. Players past
/// the end share the last entry.
const PALETTE: [(Color, AnsiColor); 5] = [
    (Color::Yellow, AnsiColor::Yellow),
    (Color::Red, AnsiColor::Red),
    (Color::Green, AnsiColor::Green),
    (Color::Blue, AnsiColor::Blue),
    (Color::Magenta, AnsiColor::Magenta),
];

fn palette_entry(player: PlayerId) -> (Color, AnsiColor) {
    PALETTE[player.index().min(PALETTE.len() - 1)]
}

/// Display color of a player's pieces
pub fn player_color(player: PlayerId) -> Color {
    palette_entry(player).0
}

/// Terminal escape color of a player's pieces
pub fn player_ansi_color(player: PlayerId) -> AnsiColor {
    palette_entry(player).1
}

/// One line per board row, top row first, three characters per cell.
pub fn board_lines(board: &Board) -> Vec<Line<'static>> {
    (0..board.rows())
        .rev()
        .map(|row| {
            let spans: Vec<Span> = (0..board.columns())
                .map(|col| match board.get(col, row) {
                    Some(player) => {
                        Span::styled(" \u{25cf} ", Style::default().fg(player_color(player)))
                    }
                    None => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}
