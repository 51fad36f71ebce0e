//! Full-screen terminal front end: single keypresses in, ratatui widgets out.

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::debug;

use crate::render;
use crate::session::{Command, Session};
use food_finder_core::{Direction, GameStatus};

const CONTROLS: &str = "Arrows/WASD move | G greedy move | R restart | H help | Q quit";

/// Map a key to a command; unbound keys are ignored
pub fn command_for_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
            Some(Command::Move(Direction::Up))
        }
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
            Some(Command::Move(Direction::Down))
        }
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
            Some(Command::Move(Direction::Left))
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
            Some(Command::Move(Direction::Right))
        }
        KeyCode::Char('g') | KeyCode::Char('G') => Some(Command::Greedy),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),
        KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('?') => Some(Command::Help),
        _ => None,
    }
}

/// Session plus the feedback from the last key
pub struct App {
    pub session: Session,
    pub messages: Vec<String>,
    pub quit: bool,
}

impl App {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            messages: Vec::new(),
            quit: false,
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        let Some(command) = command_for_key(code) else {
            return;
        };
        debug!(?command, "command");

        if command == Command::Quit {
            self.quit = true;
            return;
        }

        self.messages = match self.session.execute(command) {
            Ok(lines) => lines,
            Err(e) => vec![e.to_string()],
        };
    }

    pub fn draw(&self, f: &mut Frame) {
        let snapshot = self.session.game.snapshot();
        let grid_height = u16::try_from(snapshot.grid_size).unwrap_or(u16::MAX);

        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(grid_height.saturating_add(2)),
                Constraint::Min(3),
                Constraint::Length(3),
            ])
            .split(f.area());

        let header = Paragraph::new(render::header(&snapshot))
            .block(Block::default().borders(Borders::ALL).title("Food Finder"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(header, chunks[0]);

        let grid = Paragraph::new(render::grid(&snapshot))
            .block(Block::default().borders(Borders::ALL).title("Grid"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(grid, chunks[1]);

        let mut lines = self.messages.clone();
        lines.extend(render::status_lines(&snapshot));
        let color = match snapshot.status {
            GameStatus::Won => Color::Green,
            GameStatus::Lost => Color::Red,
            GameStatus::Ongoing => Color::Yellow,
        };
        let feedback = Paragraph::new(lines.join("\n"))
            .block(Block::default().borders(Borders::ALL).title("Feedback"))
            .style(Style::default().fg(color));
        f.render_widget(feedback, chunks[2]);

        let controls = Paragraph::new(CONTROLS)
            .block(Block::default().borders(Borders::ALL).title("Controls"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(controls, chunks[3]);
    }
}

pub fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> anyhow::Result<()> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

/// Play in the alternate screen until `q`.
pub fn run(session: Session) -> anyhow::Result<()> {
    let mut app = App::new(session);
    let mut terminal = setup_terminal()?;

    // Restore the terminal even when the loop fails
    let result = event_loop(&mut terminal, &mut app);
    cleanup_terminal()?;
    result
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> anyhow::Result<()> {
    while !app.quit {
        terminal.draw(|f| app.draw(f))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use food_finder_core::{GameConfig, GameState, Position};
    use ratatui::backend::TestBackend;

    fn app_with_food(x: i32, y: i32) -> App {
        let game = GameState::with_food(GameConfig::default(), Position::new(x, y)).unwrap();
        App::new(Session::new(game))
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(
            command_for_key(KeyCode::Up),
            Some(Command::Move(Direction::Up))
        );
        assert_eq!(
            command_for_key(KeyCode::Char('d')),
            Some(Command::Move(Direction::Right))
        );
        assert_eq!(command_for_key(KeyCode::Char('g')), Some(Command::Greedy));
        assert_eq!(command_for_key(KeyCode::Char('r')), Some(Command::Reset));
        assert_eq!(command_for_key(KeyCode::Esc), Some(Command::Quit));
        assert_eq!(command_for_key(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_keys_play_a_game() {
        let mut app = app_with_food(2, 0);

        app.handle_key(KeyCode::Right);
        assert_eq!(app.messages, vec!["That was a greedy move.".to_string()]);

        app.handle_key(KeyCode::Char('x'));
        assert_eq!(app.session.game.steps(), 1);

        app.handle_key(KeyCode::Char('d'));
        let drawn = screen(&app);
        assert!(drawn.contains("Steps: 2/15"));
        assert!(drawn.contains("You reached the food in 2 steps."));
        assert!(drawn.contains("You followed a greedy path all the way!"));

        app.handle_key(KeyCode::Down);
        assert!(screen(&app).contains("The game is over."));
        assert_eq!(app.session.game.steps(), 2);

        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.session.game.steps(), 0);
        assert!(screen(&app).contains("New game! Find the food."));
    }

    #[test]
    fn test_food_on_start_shows_win_before_any_move() {
        let mut app = app_with_food(0, 0);

        let drawn = screen(&app);
        assert!(drawn.contains("Steps: 0/15"));
        assert!(drawn.contains("You reached the food in 0 steps."));
        assert!(drawn.contains("You followed a greedy path all the way!"));

        app.handle_key(KeyCode::Right);
        assert!(screen(&app).contains("The game is over."));
        assert_eq!(app.session.game.steps(), 0);
        assert_eq!(app.session.game.player_pos(), Position::ORIGIN);
    }

    #[test]
    fn test_grid_drawn_in_widget() {
        let app = app_with_food(1, 0);
        let drawn = screen(&app);

        assert!(drawn.contains("P F . . . . . . . ."));
        assert!(drawn.contains("Controls"));
    }

    #[test]
    fn test_quit_key() {
        let mut app = app_with_food(5, 5);
        app.handle_key(KeyCode::Char('q'));
        assert!(app.quit);
        assert_eq!(app.session.game.steps(), 0);
    }
}
