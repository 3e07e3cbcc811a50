//! TUI application state and logic

use crate::closure::{Cancelled, GenerationResult, search_cancellable};
use crate::core::constants::{GAME_SIZE, MAX_NUMBER, POOL_SIZE};
use crate::core::{Draw, Game, NumberSet, Pool};
use crate::export::to_txt;
use crate::scoring::{Conference, score};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

/// Columns of the number grid
pub const GRID_WIDTH: u8 = 5;

type SearchOutcome = Result<GenerationResult, Cancelled>;

/// A search running on a worker thread
struct SearchHandle {
    cancel: Arc<AtomicBool>,
    receiver: Receiver<SearchOutcome>,
    started: Instant,
}

/// Application state
pub struct App {
    /// Numbers picked for the pool
    pub pool: NumberSet,
    /// Numbers picked for the draw
    pub draw: NumberSet,
    /// Grid position, 0-based (number = cursor + 1)
    pub cursor: u8,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub result: Option<GenerationResult>,
    /// Conference of the current games against a complete draw
    pub conference: Option<Conference>,
    pub attempt_budget: u32,
    /// Seed of the most recent search
    pub last_seed: Option<u64>,
    /// Games queued for stdout once the terminal is restored
    pub exported: Option<String>,
    pub should_quit: bool,
    rng: StdRng,
    search: Option<SearchHandle>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    PoolSelection,
    DrawSelection,
    Searching,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(attempt_budget: u32, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        Self {
            pool: NumberSet::EMPTY,
            draw: NumberSet::EMPTY,
            cursor: 0,
            input_mode: InputMode::PoolSelection,
            messages: vec![
                Message {
                    text: "Pick 21 numbers for the pool, or press 'r' for a random pool."
                        .to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Press 'g' to generate the 8-game closure.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            result: None,
            conference: None,
            attempt_budget,
            last_seed: None,
            exported: None,
            should_quit: false,
            rng,
            search: None,
        }
    }

    /// Number under the cursor
    #[must_use]
    pub const fn cursor_number(&self) -> u8 {
        self.cursor + 1
    }

    /// Move the cursor by whole cells, clamped to the grid
    pub fn move_cursor(&mut self, dx: i8, dy: i8) {
        let width = GRID_WIDTH as i8;
        let rows = (MAX_NUMBER / GRID_WIDTH) as i8;
        let col = (self.cursor as i8 % width + dx).clamp(0, width - 1);
        let row = (self.cursor as i8 / width + dy).clamp(0, rows - 1);
        self.cursor = (row * width + col) as u8;
    }

    /// Games of the current closure, empty before a successful search
    #[must_use]
    pub fn games(&self) -> &[Game] {
        self.result.as_ref().map_or(&[], |r| r.games.as_slice())
    }

    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.search.is_some()
    }

    /// Time since the running search started
    #[must_use]
    pub fn search_elapsed(&self) -> Option<Duration> {
        self.search.as_ref().map(|s| s.started.elapsed())
    }

    /// Toggle the number under the cursor in the active selection
    pub fn toggle_selected(&mut self) {
        let number = self.cursor_number();
        match self.input_mode {
            InputMode::PoolSelection => {
                if self.pool.contains(number) {
                    self.pool = self.pool.difference(NumberSet::EMPTY.with(number));
                } else if self.pool.len() < POOL_SIZE {
                    self.pool = self.pool.with(number);
                } else {
                    self.add_message("The pool already has 21 numbers", MessageStyle::Error);
                }
            }
            InputMode::DrawSelection => {
                if self.draw.contains(number) {
                    self.draw = self.draw.difference(NumberSet::EMPTY.with(number));
                } else if self.draw.len() < GAME_SIZE {
                    self.draw = self.draw.with(number);
                } else {
                    self.add_message("The draw already has 15 numbers", MessageStyle::Error);
                }
                self.update_conference();
            }
            InputMode::Searching => {}
        }
    }

    /// Fill the active selection at random
    pub fn randomize(&mut self) {
        match self.input_mode {
            InputMode::PoolSelection => {
                self.pool = Pool::random(&mut self.rng).mask();
                self.add_message(&format!("Random pool: {}", self.pool), MessageStyle::Info);
            }
            InputMode::DrawSelection => {
                self.draw = rand::seq::index::sample(
                    &mut self.rng,
                    usize::from(MAX_NUMBER),
                    GAME_SIZE,
                )
                .into_iter()
                .fold(NumberSet::EMPTY, |mask, i| mask.with(i as u8 + 1));
                self.update_conference();
            }
            InputMode::Searching => {}
        }
    }

    /// Clear the active selection
    ///
    /// Clearing the pool also discards the closure and the draw.
    pub fn clear(&mut self) {
        match self.input_mode {
            InputMode::PoolSelection => {
                self.pool = NumberSet::EMPTY;
                self.result = None;
                self.draw = NumberSet::EMPTY;
                self.conference = None;
            }
            InputMode::DrawSelection => {
                self.draw = NumberSet::EMPTY;
                self.conference = None;
            }
            InputMode::Searching => {}
        }
    }

    /// Switch between pool and draw selection
    pub fn switch_mode(&mut self) {
        match self.input_mode {
            InputMode::PoolSelection if self.games().is_empty() => {
                self.add_message("Generate a closure before entering a draw", MessageStyle::Error);
            }
            InputMode::PoolSelection => {
                self.input_mode = InputMode::DrawSelection;
                self.add_message("Enter the 15 drawn numbers", MessageStyle::Info);
            }
            InputMode::DrawSelection => self.input_mode = InputMode::PoolSelection,
            InputMode::Searching => {}
        }
    }

    /// Start the search on a worker thread
    pub fn start_search(&mut self) {
        if self.is_searching() {
            return;
        }
        let pool = match Pool::new(&self.pool.numbers()) {
            Ok(pool) => pool,
            Err(_) => {
                self.add_message(
                    &format!("Select exactly 21 numbers ({} chosen)", self.pool.len()),
                    MessageStyle::Error,
                );
                return;
            }
        };

        let seed: u64 = self.rng.random();
        let budget = self.attempt_budget;
        let cancel = Arc::new(AtomicBool::new(false));
        let (sender, receiver) = mpsc::channel();
        let flag = Arc::clone(&cancel);

        thread::spawn(move || {
            let mut rng = StdRng::seed_from_u64(seed);
            let outcome = search_cancellable(&pool, budget, &mut rng, &flag);
            // Receiver may be gone if the app quit mid-search
            let _ = sender.send(outcome);
        });

        self.last_seed = Some(seed);
        self.result = None;
        self.draw = NumberSet::EMPTY;
        self.conference = None;
        self.input_mode = InputMode::Searching;
        self.search = Some(SearchHandle {
            cancel,
            receiver,
            started: Instant::now(),
        });
        self.add_message(&format!("Searching (seed {seed})..."), MessageStyle::Info);
    }

    /// Ask the running search to stop
    pub fn cancel_search(&self) {
        if let Some(search) = &self.search {
            search.cancel.store(true, Ordering::Relaxed);
        }
    }

    /// Collect the search outcome if the worker has finished
    pub fn poll_search(&mut self) {
        let Some(search) = &self.search else {
            return;
        };
        let outcome = match search.receiver.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => Err(Cancelled { attempts: 0 }),
        };
        self.search = None;
        self.input_mode = InputMode::PoolSelection;
        self.finish_search(outcome);
    }

    fn finish_search(&mut self, outcome: SearchOutcome) {
        match outcome {
            Ok(result) if result.guaranteed => {
                self.add_message(
                    &format!(
                        "11-point guarantee found in {} attempts ({}ms)",
                        result.attempts,
                        result.time_ms()
                    ),
                    MessageStyle::Success,
                );
                self.add_message("Press TAB to enter the draw", MessageStyle::Info);
                self.result = Some(result);
            }
            Ok(result) => {
                self.add_message(
                    &format!(
                        "No guarantee after {} attempts. Try again or change the pool.",
                        result.attempts
                    ),
                    MessageStyle::Error,
                );
                self.result = Some(result);
            }
            Err(cancelled) => {
                self.add_message(&cancelled.to_string(), MessageStyle::Error);
            }
        }
    }

    fn update_conference(&mut self) {
        self.conference = if self.draw.len() == GAME_SIZE && !self.games().is_empty() {
            Draw::new(&self.draw.numbers())
                .ok()
                .map(|draw| score(self.games(), draw))
        } else {
            None
        };
    }

    /// Queue the games in TXT format for printing on exit
    pub fn export(&mut self) {
        if self.games().is_empty() {
            self.add_message("Nothing to export yet", MessageStyle::Error);
            return;
        }
        self.exported = Some(to_txt(self.games()));
        self.add_message(
            "Games will be printed to stdout when you quit",
            MessageStyle::Success,
        );
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }
    if let Some(games) = app.exported {
        println!("{games}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.poll_search();
        terminal.draw(|f| super::rendering::ui(f, app))?;

        // Short poll keeps the search timer and result fresh
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.cancel_search();
                app.should_quit = true;
            } else if app.input_mode == InputMode::Searching {
                match key.code {
                    KeyCode::Esc => app.cancel_search(),
                    KeyCode::Char('q') => {
                        app.cancel_search();
                        app.should_quit = true;
                    }
                    _ => {}
                }
            } else {
                match key.code {
                    KeyCode::Char('q') => app.should_quit = true,
                    KeyCode::Left | KeyCode::Char('h') => app.move_cursor(-1, 0),
                    KeyCode::Right | KeyCode::Char('l') => app.move_cursor(1, 0),
                    KeyCode::Up | KeyCode::Char('k') => app.move_cursor(0, -1),
                    KeyCode::Down | KeyCode::Char('j') => app.move_cursor(0, 1),
                    KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(),
                    KeyCode::Char('r') => app.randomize(),
                    KeyCode::Char('c') => app.clear(),
                    KeyCode::Char('g') => app.start_search(),
                    KeyCode::Char('x') => app.export(),
                    KeyCode::Tab | KeyCode::Char('d') => app.switch_mode(),
                    KeyCode::Esc if app.input_mode == InputMode::DrawSelection => {
                        app.switch_mode();
                    }
                    _ => {}
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wait_for_search(app: &mut App) {
        let deadline = Instant::now() + Duration::from_secs(120);
        while app.is_searching() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(10));
            app.poll_search();
        }
    }

    #[test]
    fn cursor_stays_on_grid() {
        let mut app = App::new(10, Some(1));
        app.move_cursor(-1, -1);
        assert_eq!(app.cursor_number(), 1);

        app.move_cursor(10, 10);
        assert_eq!(app.cursor_number(), 25);

        app.move_cursor(-1, 0);
        app.move_cursor(0, -2);
        assert_eq!(app.cursor_number(), 14);
    }

    #[test]
    fn pool_selection_stops_at_21() {
        let mut app = App::new(10, Some(1));
        for n in 0..25 {
            app.cursor = n;
            app.toggle_selected();
        }
        assert_eq!(app.pool.len(), 21);
        assert!(matches!(
            app.messages.last().map(|m| &m.style),
            Some(MessageStyle::Error)
        ));

        app.cursor = 0;
        app.toggle_selected();
        assert_eq!(app.pool.len(), 20);
        assert!(!app.pool.contains(1));
    }

    #[test]
    fn random_pool_has_21_numbers() {
        let mut app = App::new(10, Some(7));
        app.randomize();
        assert_eq!(app.pool.len(), 21);

        app.clear();
        assert!(app.pool.is_empty());
    }

    #[test]
    fn draw_mode_needs_games() {
        let mut app = App::new(10, Some(1));
        app.switch_mode();
        assert_eq!(app.input_mode, InputMode::PoolSelection);
    }

    #[test]
    fn generate_rejects_incomplete_pool() {
        let mut app = App::new(10, Some(1));
        app.start_search();
        assert!(!app.is_searching());
        assert_eq!(app.input_mode, InputMode::PoolSelection);
    }

    #[test]
    fn search_result_arrives_from_worker() {
        let mut app = App::new(5, Some(3));
        app.randomize();
        app.start_search();
        assert_eq!(app.input_mode, InputMode::Searching);
        assert!(app.last_seed.is_some());

        wait_for_search(&mut app);

        assert!(!app.is_searching());
        assert_eq!(app.input_mode, InputMode::PoolSelection);
        let result = app.result.as_ref().unwrap();
        assert!(result.guaranteed || result.attempts == 5);
    }

    #[test]
    fn cancelled_search_keeps_no_result() {
        let mut app = App::new(u32::MAX, Some(3));
        app.randomize();
        app.start_search();
        app.cancel_search();

        wait_for_search(&mut app);

        assert!(!app.is_searching());
        // Either the worker saw the flag or it had already finished
        if app.result.is_none() {
            assert!(matches!(
                app.messages.last().map(|m| &m.style),
                Some(MessageStyle::Error)
            ));
        }
    }

    #[test]
    fn complete_draw_scores_the_games() {
        let mut app = App::new(10, Some(1));
        let pool = Pool::new(&(1..=21).collect::<Vec<u8>>()).unwrap();
        let games = (0..8u8)
            .map(|i| {
                let numbers: Vec<u8> = (1..=21).filter(|n| n % 8 != i).take(15).collect();
                Game::from_numbers(i + 1, &numbers).unwrap()
            })
            .collect();
        app.pool = pool.mask();
        app.result = Some(GenerationResult::accepted(
            games,
            11,
            1,
            54_264,
            Duration::ZERO,
        ));

        app.switch_mode();
        assert_eq!(app.input_mode, InputMode::DrawSelection);

        app.randomize();
        assert_eq!(app.draw.len(), 15);
        let conference = app.conference.as_ref().unwrap();
        assert_eq!(conference.scores.len(), 8);

        app.cursor = app.draw.iter().next().unwrap() - 1;
        app.toggle_selected();
        assert!(app.conference.is_none());
    }

    #[test]
    fn export_queues_games_for_stdout() {
        let mut app = App::new(10, Some(1));
        app.export();
        assert!(app.exported.is_none());
        assert!(matches!(
            app.messages.last().map(|m| &m.style),
            Some(MessageStyle::Error)
        ));

        let games = vec![Game::from_numbers(1, &(1..=15).collect::<Vec<u8>>()).unwrap()];
        app.result = Some(GenerationResult::accepted(
            games,
            11,
            1,
            54_264,
            Duration::ZERO,
        ));
        app.export();
        assert_eq!(
            app.exported.as_deref(),
            Some("01 02 03 04 05 06 07 08 09 10 11 12 13 14 15")
        );
    }
}
