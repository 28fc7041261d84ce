use crate::config::AppConfig;
use crate::error::GameError;
use crate::game::{Game, GameState, PlayerId};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

/// Hot-seat game: every player shares the keyboard.
pub struct App {
    game: Game,
    config: AppConfig,
    selected_column: usize,
    /// Who drops the first piece; only changeable before the first move
    opening_player: PlayerId,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self, GameError> {
        let game = Game::new(config.game)?;
        Ok(App {
            selected_column: config.game.columns / 2,
            opening_player: config.ui.opening_player(),
            game,
            config,
            should_quit: false,
            message: None,
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Player whose piece the next drop places
    pub fn to_move(&self) -> PlayerId {
        self.game.current_player().unwrap_or(self.opening_player)
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(self.config.ui.poll_interval_ms))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.config.game.columns {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Tab => {
                if self.game.state() == GameState::NotStarted {
                    self.opening_player = self.opening_player.next(self.config.game.player_count);
                    self.message = Some(format!("{} will start.", self.opening_player));
                }
            }
            KeyCode::Char('r') => {
                // The config was validated when the app was built
                self.game = Game::new(self.config.game).unwrap_or_default();
                self.selected_column = self.config.game.columns / 2;
                self.opening_player = self.config.ui.opening_player();
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        if self.game.state() == GameState::Finished {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        let player = self.to_move();
        match self.game.apply_move(self.selected_column, player) {
            Ok(outcome) if outcome.is_game_over() => {
                self.message = Some(format!("{} wins!", player));
            }
            Ok(_) if self.game.is_draw() => {
                self.message = Some("The board is full. It's a draw!".to_string());
            }
            Ok(_) => {}
            Err(err) => {
                self.message = Some(format!("Illegal move: {}", err));
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game,
            self.selected_column,
            self.to_move(),
            &self.message,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    #[test]
    fn test_starts_in_middle_column() {
        let app = App::new(AppConfig::default()).unwrap();
        assert_eq!(app.selected_column, 3);
        assert_eq!(app.to_move(), PlayerId(0));
    }

    #[test]
    fn test_selection_stays_on_board() {
        let mut app = App::new(AppConfig::default()).unwrap();
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column, 6);
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column, 0);
    }

    #[test]
    fn test_tab_changes_opening_player_before_first_move() {
        let mut app = App::new(AppConfig::default()).unwrap();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.to_move(), PlayerId(1));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game().cell(3, 0), Some(PlayerId(1)));
        assert_eq!(app.to_move(), PlayerId(0));

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.to_move(), PlayerId(0));
    }

    #[test]
    fn test_full_column_reports_message() {
        let mut app = App::new(AppConfig::default()).unwrap();
        for _ in 0..6 {
            press(&mut app, KeyCode::Enter);
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.message.as_deref(),
            Some("Illegal move: column 3 is full")
        );
    }

    #[test]
    fn test_win_and_restart() {
        let mut app = App::new(AppConfig::default()).unwrap();
        // Yellow stacks column 3, Red stacks column 4
        for _ in 0..3 {
            press(&mut app, KeyCode::Enter);
            press(&mut app, KeyCode::Right);
            press(&mut app, KeyCode::Enter);
            press(&mut app, KeyCode::Left);
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message.as_deref(), Some("Player1 wins!"));
        assert_eq!(app.game().winning_player(), Ok(PlayerId(0)));

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.game().state(), GameState::NotStarted);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(AppConfig::default()).unwrap();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
