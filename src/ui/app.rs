use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{backend::Backend, Terminal};
use tracing::{error, warn};

use super::input::{parse_factor, MAX_INPUT_LEN};
use crate::ai::HeuristicAgent;
use crate::config::{AppConfig, GameConfig};
use crate::error::SaveError;
use crate::game::{ComputerTurn, Game, GameStatus, MoveOutcome, Player, TurnStart};
use crate::persistence::SaveStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Menu,
    Instructions,
    Playing,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuItem {
    NewGame,
    LoadGame,
    HowToPlay,
    Exit,
}

impl MenuItem {
    pub(crate) const ALL: [MenuItem; 4] = [
        MenuItem::NewGame,
        MenuItem::LoadGame,
        MenuItem::HowToPlay,
        MenuItem::Exit,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            MenuItem::NewGame => "New Game",
            MenuItem::LoadGame => "Load Game",
            MenuItem::HowToPlay => "How to Play",
            MenuItem::Exit => "Exit",
        }
    }
}

/// Colour family for the message line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tone {
    Info,
    Success,
    Error,
    Computer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Message {
    pub text: String,
    pub tone: Tone,
}

impl Message {
    fn new(text: impl Into<String>, tone: Tone) -> Option<Self> {
        Some(Message {
            text: text.into(),
            tone,
        })
    }
}

pub struct App {
    game: Game,
    agent: HeuristicAgent,
    store: SaveStore,
    rng: StdRng,
    pacing: GameConfig,
    screen: Screen,
    selected: usize,
    input: String,
    message: Option<Message>,
    thinking_until: Option<Instant>,
    should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let (mut rng, agent) = match config.game.seed {
            Some(seed) => (
                StdRng::seed_from_u64(seed),
                HeuristicAgent::with_seed(seed.wrapping_add(1)),
            ),
            None => (StdRng::from_os_rng(), HeuristicAgent::new()),
        };
        App {
            game: Game::new(&mut rng),
            agent,
            store: SaveStore::new(config.save.clone()),
            rng,
            pacing: config.game.clone(),
            screen: Screen::Menu,
            selected: 0,
            input: String::new(),
            message: None,
            thinking_until: None,
            should_quit: false,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.tick(Instant::now());
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::Menu => self.handle_menu_key(key.code),
            Screen::Instructions => self.screen = Screen::Menu,
            Screen::Playing => self.handle_game_key(key.code),
            Screen::GameOver => {
                self.message = None;
                self.screen = Screen::Menu;
            }
        }
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        let count = MenuItem::ALL.len();
        match code {
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => {
                self.selected = (self.selected + 1) % count;
            }
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => {
                self.selected = (self.selected + count - 1) % count;
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.select(MenuItem::ALL[self.selected]),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn select(&mut self, item: MenuItem) {
        match item {
            MenuItem::NewGame => {
                self.game.new_game(&mut self.rng);
                self.message = None;
                self.enter_game();
            }
            MenuItem::LoadGame => match self.load() {
                Ok(()) => {
                    self.message = Message::new("Game Loaded!", Tone::Success);
                    self.enter_game();
                }
                Err(e) => {
                    warn!(error = %e, "load failed");
                    self.message =
                        Message::new("Failed to load game or no save file found.", Tone::Error);
                }
            },
            MenuItem::HowToPlay => self.screen = Screen::Instructions,
            MenuItem::Exit => self.should_quit = true,
        }
    }

    fn load(&mut self) -> Result<(), SaveError> {
        let text = self.store.load_text()?;
        self.game.load_text(&text)
    }

    fn enter_game(&mut self) {
        self.screen = Screen::Playing;
        self.input.clear();
        self.thinking_until = None;
        self.start_turn();
    }

    fn handle_game_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.game.request_quit();
                self.finish();
            }
            KeyCode::Char('s') | KeyCode::Char('S') => self.save(),
            KeyCode::Char(c) if c.is_ascii_digit() && self.human_to_move() => {
                if self.input.len() < MAX_INPUT_LEN {
                    self.input.push(c);
                }
            }
            KeyCode::Backspace if self.human_to_move() => {
                self.input.pop();
            }
            KeyCode::Enter if self.human_to_move() => self.submit_input(),
            _ => {}
        }
    }

    fn human_to_move(&self) -> bool {
        self.game.status() == GameStatus::AwaitingMove(Player::Human)
    }

    fn save(&mut self) {
        self.message = match self.store.save(&self.game.save_text()) {
            Ok(()) => Message::new("Game Saved!", Tone::Success),
            Err(e) => {
                error!(error = %e, "save failed");
                Message::new("Save Failed!", Tone::Error)
            }
        };
    }

    fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input);
        let factor = match parse_factor(&input) {
            Ok(f) => f,
            Err(e) => {
                self.message = Message::new(format!("Error: {e}"), Tone::Error);
                return;
            }
        };
        match self.game.submit_human_factor(factor) {
            Ok(outcome) => {
                self.message = Message::new(
                    format!("You chose factor {}, marking {}", outcome.factor, outcome.product),
                    Tone::Info,
                );
                self.after_move(outcome);
            }
            Err(e) => {
                self.message = Message::new(format!("Error: {e}"), Tone::Error);
                // An internal fault still hands the turn over
                if !self.human_to_move() {
                    self.start_turn();
                }
            }
        }
    }

    fn after_move(&mut self, outcome: MoveOutcome) {
        if outcome.winner.is_some() {
            self.finish();
        } else {
            self.start_turn();
        }
    }

    /// Resolve passes and set up whoever moves next.
    fn start_turn(&mut self) {
        match self.game.begin_turn() {
            Ok(TurnStart::Ready(Player::Human)) => {}
            Ok(TurnStart::Ready(Player::Computer)) => self.schedule_computer(),
            Ok(TurnStart::Passed { from, to }) => {
                self.message = Message::new(
                    format!("{} has no valid moves. Passing turn.", from.name()),
                    Tone::Info,
                );
                if to == Player::Computer {
                    self.schedule_computer();
                }
            }
            Ok(TurnStart::Draw) | Err(_) => self.finish(),
        }
    }

    fn schedule_computer(&mut self) {
        let min = self.pacing.thinking_delay_min_ms;
        let max = self.pacing.thinking_delay_max_ms.max(min);
        let delay = Duration::from_millis(self.rng.random_range(min..=max));
        self.thinking_until = Some(Instant::now() + delay);
    }

    /// Play the computer's move once its thinking pause is over.
    pub(crate) fn tick(&mut self, now: Instant) {
        let Some(deadline) = self.thinking_until else {
            return;
        };
        if self.screen != Screen::Playing || now < deadline {
            return;
        }
        self.thinking_until = None;

        match self.game.play_computer_turn(&mut self.agent) {
            Ok(ComputerTurn::Moved(outcome)) => {
                self.message = Message::new(
                    format!(
                        "Computer chose factor {}, marking {}",
                        outcome.factor, outcome.product
                    ),
                    Tone::Computer,
                );
                self.after_move(outcome);
            }
            Ok(ComputerTurn::Passed) => {
                self.message = Message::new("No valid moves - Computer passes", Tone::Info);
                self.start_turn();
            }
            Err(e) => {
                error!(error = %e, "computer move failed");
                self.message = Message::new(format!("Error: {e}"), Tone::Error);
                self.start_turn();
            }
        }
    }

    fn finish(&mut self) {
        self.thinking_until = None;
        self.input.clear();
        self.screen = Screen::GameOver;
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        match self.screen {
            Screen::Menu => super::menu::render_menu(frame, self.selected, &self.message),
            Screen::Instructions => super::menu::render_instructions(frame),
            Screen::Playing => super::game_view::render(
                frame,
                &self.game.snapshot(),
                &self.input,
                &self.message,
                self.thinking_until.is_some(),
            ),
            Screen::GameOver => {
                let snapshot = self.game.snapshot();
                super::game_view::render(frame, &snapshot, "", &self.message, false);
                super::game_view::render_game_over(frame, snapshot.status);
            }
        }
    }
}
