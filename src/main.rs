use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use grid_snake::config::{GridSize, DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH, MAX_LEVEL};
use grid_snake::controller::GameLoop;
use grid_snake::error::Error;
use grid_snake::game::GameStatus;
use grid_snake::input::{map_key_event, GameInput};
use grid_snake::renderer;
use grid_snake::terminal_runtime::{install_panic_hook, AppTerminal, TerminalSession};
use grid_snake::theme::{ThemeCatalog, DEFAULT_THEME_ID};
use grid_snake::ui::surface::FrameSurface;
use grid_snake::ui::{hud, menu, TerminalUi};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// How often the event loop wakes to poll input between ticks.
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(name = "grid-snake", about = "Grid-based snake game with a fixed-tick loop")]
struct Cli {
    /// Drawing-surface width in surface units; must be a multiple of 20.
    #[arg(long, default_value_t = DEFAULT_SURFACE_WIDTH)]
    width: u16,

    /// Drawing-surface height in surface units; must be a multiple of 20.
    #[arg(long, default_value_t = DEFAULT_SURFACE_HEIGHT)]
    height: u16,

    /// Starting level (1-4); each level shortens the tick interval by 50ms.
    #[arg(long, default_value_t = 1)]
    level: u32,

    /// Theme id to start with.
    #[arg(long, default_value = DEFAULT_THEME_ID)]
    theme: String,

    /// Seed for reproducible food placement.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Error> {
    let cli = Cli::parse();

    let grid = GridSize::from_surface(cli.width, cli.height)?;
    if !(1..=MAX_LEVEL).contains(&cli.level) {
        return Err(Error::InvalidLevel(cli.level));
    }

    let mut themes = ThemeCatalog::load();
    if !themes.select_by_id(&cli.theme) {
        return Err(Error::UnknownTheme(cli.theme));
    }

    install_panic_hook();
    let mut session = TerminalSession::enter()?;
    run(session.terminal_mut(), grid, &cli, themes)
}

fn run(
    terminal: &mut AppTerminal,
    grid: GridSize,
    cli: &Cli,
    themes: ThemeCatalog,
) -> Result<(), Error> {
    let mut game = GameLoop::new(grid, cli.seed, themes, TerminalUi::default());

    let now = Instant::now();
    game.set_level(cli.level, now);
    game.start(now);

    loop {
        game.poll_tick(Instant::now());

        terminal.draw(|frame| draw_frame(frame, &game))?;

        if event::poll(INPUT_POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if let Some(input) = map_key_event(key) {
                    if input == GameInput::Quit {
                        break;
                    }

                    game.handle_input(input, Instant::now());
                }
            }
        }
    }

    Ok(())
}

fn draw_frame(frame: &mut Frame<'_>, game: &GameLoop<TerminalUi>) {
    let grid = game.state().grid();
    let theme = game.theme();

    let [play_row, hud_row] = Layout::vertical([
        Constraint::Length(grid.rows + 2),
        Constraint::Length(1),
    ])
    .areas(frame.area());
    let [play_area, _] =
        Layout::horizontal([Constraint::Length(grid.cols + 2), Constraint::Min(0)])
            .areas(play_row);

    let block = Block::bordered().border_style(Style::new().fg(theme.text));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    let mut surface = FrameSurface::new(frame.buffer_mut(), inner);
    renderer::render(game.state(), theme, &mut surface);

    hud::render_hud(
        frame,
        hud_row,
        game.ui().score_line(),
        game.state().level,
        game.theme_id(),
    );

    match game.state().status {
        GameStatus::Paused => menu::render_pause_menu(frame, play_area),
        GameStatus::Over => menu::render_game_over_menu(
            frame,
            play_area,
            game.ui().pending_alert().unwrap_or("Game Over!"),
        ),
        _ => {}
    }
}
