use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_x::config::AppConfig;
use connect_x::game::{Game, PlayerId};
use connect_x::ui::{text, App};

/// Play generalized Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-x", about = "Connect K in a row on any board, for any number of players")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-x.toml")]
    config: PathBuf,

    /// Override number of columns
    #[arg(long)]
    columns: Option<usize>,

    /// Override number of rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override pieces in a row needed to win
    #[arg(long)]
    winning_count: Option<usize>,

    /// Override number of players
    #[arg(long)]
    players: Option<usize>,

    /// Opening player, one-based
    #[arg(long)]
    first_player: Option<usize>,

    /// Replay these columns (zero-based, comma separated) without the TUI
    #[arg(long, value_delimiter = ',')]
    moves: Option<Vec<usize>>,

    /// Disable ANSI colors in headless output
    #[arg(long)]
    no_color: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(columns) = cli.columns {
        config.game.columns = columns;
    }
    if let Some(rows) = cli.rows {
        config.game.rows = rows;
    }
    if let Some(winning_count) = cli.winning_count {
        config.game.winning_count = winning_count;
    }
    if let Some(players) = cli.players {
        config.game.player_count = players;
    }
    if let Some(first_player) = cli.first_player {
        config.ui.first_player = first_player;
    }
    config.validate().context("invalid configuration")?;

    match cli.moves {
        Some(moves) => replay(&config, &moves, !cli.no_color),
        None => run_tui(config),
    }
}

/// Apply `moves` in turn order, printing the board after each one.
fn replay(config: &AppConfig, moves: &[usize], colored: bool) -> Result<()> {
    let mut game = Game::new(config.game)?;
    let opening = config.ui.opening_player();

    for (turn, &column) in moves.iter().enumerate() {
        let player: PlayerId = game.current_player().unwrap_or(opening);
        let outcome = game
            .apply_move(column, player)
            .with_context(|| format!("move {} ({} in column {})", turn + 1, player, column))?;

        println!("{} played column {}.", player, column);
        print!("{}", text::render_game(&game, colored));

        if outcome.is_game_over() {
            if turn + 1 < moves.len() {
                bail!(
                    "game ended after move {}, {} moves left over",
                    turn + 1,
                    moves.len() - turn - 1
                );
            }
            break;
        }
        if game.is_draw() {
            println!("The board is full. It's a draw!");
        }
    }
    Ok(())
}

fn run_tui(config: AppConfig) -> Result<()> {
    let mut app = App::new(config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("terminal UI failed")
}
