//! Plain-text board rendering for headless output.

use crossterm::style::{self, Stylize};

use super::board_widget::player_ansi_color;
use crate::game::{Board, Game};

/// Draw the board top row first. Pieces show their one-based player number,
/// colored with ANSI escapes when `colored` is set.
pub fn render_board(board: &Board, colored: bool) -> String {
    let mut out = String::new();
    for row in (0..board.rows()).rev() {
        for col in 0..board.columns() {
            match board.get(col, row) {
                Some(player) => {
                    let cell = format!(" {} ", player.index() + 1);
                    if colored {
                        let styled = style::style(cell).with(player_ansi_color(player));
                        out.push_str(&styled.to_string());
                    } else {
                        out.push_str(&cell);
                    }
                }
                None => out.push_str(" . "),
            }
        }
        out.push('\n');
    }
    out
}

/// Board followed by the status line.
pub fn render_game(game: &Game, colored: bool) -> String {
    format!("{}{}\n", render_board(game.board(), colored), game.status())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::PlayerId;

    #[test]
    fn test_render_board_plain() {
        let mut game = Game::with_dimensions(3, 2, 2, 2).unwrap();
        game.apply_move(0, PlayerId(1)).unwrap();
        game.apply_move(2, PlayerId(0)).unwrap();

        assert_eq!(render_board(game.board(), false), " .  .  . \n 2  .  1 \n");
    }

    #[test]
    fn test_render_game_appends_status() {
        let game = Game::default();
        let text = render_game(&game, false);
        assert!(text.ends_with("The game hasn't started yet. Anyone can take the first turn.\n"));
        assert_eq!(text.lines().count(), 7);
    }

    #[test]
    fn test_colored_output_has_escapes() {
        let mut game = Game::default();
        game.apply_move(0, PlayerId(0)).unwrap();
        let text = render_board(game.board(), true);
        assert!(text.contains('\u{1b}'));
        assert!(text.contains(" 1 "));
    }
}
