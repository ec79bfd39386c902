use std::time::Instant;

use crate::config::GridSize;
use crate::game::{GameState, GameStatus};
use crate::input::{Direction, GameInput};
use crate::theme::{Theme, ThemeCatalog};
use crate::timer::TickTimer;

/// External UI surface the controller reports into: the score text sink,
/// the terminal game-over notification, and the style hook driven by
/// theme changes.
pub trait Ui {
    fn show_score(&mut self, text: &str);
    fn alert(&mut self, text: &str);
    fn apply_theme(&mut self, theme_id: &str);
}

/// Owns the game state, the tick schedule, and the theme selection.
///
/// All mutation goes through these methods; the renderer and the food
/// engine only ever see the state by reference for the duration of a
/// call.
#[derive(Debug)]
pub struct GameLoop<U: Ui> {
    state: GameState,
    timer: Option<TickTimer>,
    themes: ThemeCatalog,
    ui: U,
    grid: GridSize,
    seed: Option<u64>,
}

impl<U: Ui> GameLoop<U> {
    /// Creates a fresh session. The score line is published immediately,
    /// before the first tick.
    pub fn new(grid: GridSize, seed: Option<u64>, themes: ThemeCatalog, mut ui: U) -> Self {
        let state = new_state(grid, seed);
        ui.show_score(&state.score_text());
        ui.apply_theme(themes.current_id());

        Self {
            state,
            timer: None,
            themes,
            ui,
            grid,
            seed,
        }
    }

    /// Schedules the repeating tick at the current speed, replacing any
    /// previous schedule. Does nothing once the game is over.
    pub fn start(&mut self, now: Instant) {
        if self.state.status == GameStatus::Over {
            return;
        }

        if self.state.status == GameStatus::Ready {
            self.state.status = GameStatus::Running;
        }

        self.timer = Some(TickTimer::schedule(self.state.interval, now));
    }

    /// Suspends play. The tick schedule keeps firing; ticks no-op until
    /// resumed.
    pub fn pause(&mut self) {
        if self.state.status == GameStatus::Running {
            self.state.status = GameStatus::Paused;
        }
    }

    /// Resumes play after a pause.
    pub fn resume(&mut self) {
        if self.state.status == GameStatus::Paused {
            self.state.status = GameStatus::Running;
        }
    }

    /// Cancels the schedule, rebuilds the state from its initial values,
    /// and starts again. The theme selection survives the restart.
    pub fn restart(&mut self, now: Instant) {
        self.timer = None;
        self.state = new_state(self.grid, self.seed);
        self.ui.show_score(&self.state.score_text());
        self.start(now);
    }

    /// Stores the level and its speed. While running, the schedule is
    /// replaced at the new speed immediately rather than at the next
    /// tick boundary; while paused or over the new speed is stored only.
    pub fn set_level(&mut self, level: u32, now: Instant) {
        self.state.set_level(level);

        if self.state.status == GameStatus::Running && self.timer.is_some() {
            self.timer = Some(TickTimer::schedule(self.state.interval, now));
        }
    }

    /// Applies a direction key by its identifier. Non-arrow keys and
    /// exact reversals of the current heading are ignored.
    pub fn set_direction(&mut self, key: &str) {
        if let Some(direction) = Direction::from_key_name(key) {
            self.state.snake.set_direction(direction);
        }
    }

    /// Selects a theme by id and notifies the style hook. Unknown ids
    /// are ignored. Never restarts a stopped schedule.
    pub fn set_theme(&mut self, id: &str) -> bool {
        if self.themes.select_by_id(id) {
            let current = self.themes.current_id().to_owned();
            self.ui.apply_theme(&current);
            return true;
        }

        false
    }

    /// Cycles to the next theme in the catalog.
    pub fn next_theme(&mut self) {
        self.themes.select_next();
        let current = self.themes.current_id().to_owned();
        self.ui.apply_theme(&current);
    }

    /// Dispatches one control event.
    pub fn handle_input(&mut self, input: GameInput, now: Instant) {
        match input {
            GameInput::DirectionKey(key) => self.set_direction(key),
            GameInput::Start => self.start(now),
            GameInput::Pause => self.pause(),
            GameInput::Resume => self.resume(),
            GameInput::Restart => self.restart(now),
            GameInput::Level(level) => self.set_level(level, now),
            GameInput::NextTheme => self.next_theme(),
            // Quitting is the event loop's concern.
            GameInput::Quit => {}
        }
    }

    /// Runs one scheduled tick if the timer is due.
    ///
    /// While paused (or before start) a due tick is a no-op; the
    /// schedule itself stays armed. On the transition into game over the
    /// schedule is cancelled and the terminal notification fires, once.
    /// Returns true when the state advanced.
    pub fn poll_tick(&mut self, now: Instant) -> bool {
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };
        if !timer.poll(now) {
            return false;
        }
        if self.state.status != GameStatus::Running {
            return false;
        }

        self.state.advance();
        self.ui.show_score(&self.state.score_text());

        if self.state.status == GameStatus::Over {
            self.timer = None;
            let message = format!("Game Over! Your score: {}", self.state.score);
            self.ui.alert(&message);
        }

        true
    }

    /// Returns the game state for rendering.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the selected theme.
    #[must_use]
    pub fn theme(&self) -> &Theme {
        self.themes.current()
    }

    /// Returns the selected theme id.
    #[must_use]
    pub fn theme_id(&self) -> &str {
        self.themes.current_id()
    }

    /// Returns the UI sink.
    #[must_use]
    pub fn ui(&self) -> &U {
        &self.ui
    }
}

fn new_state(grid: GridSize, seed: Option<u64>) -> GameState {
    match seed {
        Some(seed) => GameState::new_with_seed(grid, seed),
        None => GameState::new(grid),
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use crate::config::GridSize;
    use crate::game::GameStatus;
    use crate::snake::{Position, Snake};
    use crate::theme::ThemeCatalog;

    use super::{GameLoop, Ui};

    const GRID: GridSize = GridSize { cols: 20, rows: 15 };

    /// Records everything the controller pushes at the UI layer.
    #[derive(Debug, Default)]
    struct RecordingUi {
        score_lines: Vec<String>,
        alerts: Vec<String>,
        themes: Vec<String>,
    }

    impl Ui for RecordingUi {
        fn show_score(&mut self, text: &str) {
            self.score_lines.push(text.to_owned());
        }

        fn alert(&mut self, text: &str) {
            self.alerts.push(text.to_owned());
        }

        fn apply_theme(&mut self, theme_id: &str) {
            self.themes.push(theme_id.to_owned());
        }
    }

    fn new_loop() -> GameLoop<RecordingUi> {
        GameLoop::new(
            GRID,
            Some(42),
            ThemeCatalog::builtin(),
            RecordingUi::default(),
        )
    }

    #[test]
    fn initialization_publishes_score_and_theme() {
        let game = new_loop();

        assert_eq!(game.ui().score_lines, vec!["Score: 0"]);
        assert_eq!(game.ui().themes, vec!["default"]);
        assert_eq!(game.state().status, GameStatus::Ready);
    }

    #[test]
    fn ticks_fire_on_the_schedule() {
        let t0 = Instant::now();
        let mut game = new_loop();
        game.start(t0);

        assert!(!game.poll_tick(t0 + Duration::from_millis(100)));
        assert!(game.poll_tick(t0 + Duration::from_millis(200)));
        assert_eq!(game.state().snake.head(), Position { x: 3, y: 2 });
    }

    #[test]
    fn pause_suppresses_ticks_without_cancelling() {
        let t0 = Instant::now();
        let mut game = new_loop();
        game.start(t0);
        game.pause();

        // The schedule is still armed but ticks no-op while paused.
        assert!(!game.poll_tick(t0 + Duration::from_millis(200)));
        assert_eq!(game.state().status, GameStatus::Paused);

        game.resume();
        assert!(game.poll_tick(t0 + Duration::from_millis(400)));
        assert_eq!(game.state().snake.head(), Position { x: 3, y: 2 });
    }

    #[test]
    fn resume_does_nothing_before_start() {
        let mut game = new_loop();

        game.resume();
        assert_eq!(game.state().status, GameStatus::Ready);
    }

    #[test]
    fn level_change_reschedules_immediately_while_running() {
        let t0 = Instant::now();
        let mut game = new_loop();
        game.start(t0);

        // Halfway through the 200ms interval, switch to level 3 (100ms).
        let mid = t0 + Duration::from_millis(150);
        game.set_level(3, mid);
        assert_eq!(game.state().interval, Duration::from_millis(100));

        // The old 200ms deadline no longer fires...
        assert!(!game.poll_tick(t0 + Duration::from_millis(200)));
        // ...the next tick lands one new interval after the change.
        assert!(game.poll_tick(mid + Duration::from_millis(100)));
    }

    #[test]
    fn level_change_while_paused_is_stored_only() {
        let t0 = Instant::now();
        let mut game = new_loop();
        game.start(t0);
        game.pause();

        game.set_level(2, t0 + Duration::from_millis(50));

        assert_eq!(game.state().level, 2);
        assert_eq!(game.state().interval, Duration::from_millis(150));
        assert_eq!(game.state().status, GameStatus::Paused);
    }

    #[test]
    fn direction_keys_apply_and_reversals_are_ignored() {
        let mut game = new_loop();

        game.set_direction("ArrowLeft");
        assert_eq!(
            game.state().snake.direction(),
            crate::input::Direction::Right
        );

        game.set_direction("ArrowUp");
        assert_eq!(game.state().snake.direction(), crate::input::Direction::Up);

        game.set_direction("KeyW");
        assert_eq!(game.state().snake.direction(), crate::input::Direction::Up);
    }

    #[test]
    fn game_over_cancels_the_schedule_and_alerts_once() {
        let t0 = Instant::now();
        let mut game = new_loop();
        game.start(t0);

        // Head for the left wall from x=2: three ticks to x=-1.
        game.set_direction("ArrowUp");
        game.set_direction("ArrowLeft");
        let mut at = t0;
        for _ in 0..3 {
            at += Duration::from_millis(200);
            game.poll_tick(at);
        }

        assert_eq!(game.state().status, GameStatus::Over);
        assert_eq!(game.ui().alerts, vec!["Game Over! Your score: 0"]);

        // No further ticks come out of a cancelled schedule.
        assert!(!game.poll_tick(at + Duration::from_millis(200)));
        assert!(!game.poll_tick(at + Duration::from_millis(400)));
        assert_eq!(game.ui().alerts.len(), 1);
    }

    #[test]
    fn start_after_over_is_rejected_until_restart() {
        let t0 = Instant::now();
        let mut game = new_loop();
        game.start(t0);
        force_over(&mut game, t0);

        game.start(t0 + Duration::from_secs(1));
        assert_eq!(game.state().status, GameStatus::Over);
        assert!(!game.poll_tick(t0 + Duration::from_secs(2)));

        game.restart(t0 + Duration::from_secs(1));
        assert_eq!(game.state().status, GameStatus::Running);
        assert_eq!(game.state().score, 0);
        assert_eq!(game.state().level, 1);
        assert!(game.poll_tick(t0 + Duration::from_millis(1200)));
    }

    #[test]
    fn restart_publishes_a_fresh_score_line() {
        let t0 = Instant::now();
        let mut game = new_loop();
        game.start(t0);
        game.restart(t0 + Duration::from_millis(50));

        assert_eq!(game.ui().score_lines, vec!["Score: 0", "Score: 0"]);
    }

    #[test]
    fn theme_changes_reach_the_style_hook_and_survive_over() {
        let t0 = Instant::now();
        let mut game = new_loop();
        game.start(t0);

        assert!(game.set_theme("dark"));
        assert!(!game.set_theme("no-such-theme"));
        assert_eq!(game.theme_id(), "dark");

        force_over(&mut game, t0);
        assert!(game.set_theme("default"));
        assert_eq!(game.state().status, GameStatus::Over);
        assert_eq!(game.ui().themes, vec!["default", "dark", "default"]);
    }

    fn force_over(game: &mut GameLoop<RecordingUi>, t0: Instant) {
        game.state.snake = Snake::new(Position { x: 0, y: 5 }, crate::input::Direction::Left);
        assert!(game.poll_tick(t0 + Duration::from_millis(200)));
        assert_eq!(game.state().status, GameStatus::Over);
    }
}
