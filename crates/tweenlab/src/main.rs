use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{DefaultTerminal, Frame};
use tweenlab_anim::CommandQueue;
use tweenlab_config::Config;

mod scenes;

use scenes::clock::TweenClockScene;
use scenes::flip::FlipScene;
use scenes::polygon::{PolygonScaleScene, PolygonScene};
use scenes::vertex::VertexScene;
use scenes::{follow, menu, wall};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load()?;
    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}

/// Which screen is on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Menu,
    Polygon,
    PolygonScale,
    VertexWeb,
    TweenClock,
    WallClock,
    FollowPath,
    FlipCard,
}

impl Screen {
    /// Map a menu digit to its scene.
    fn from_digit(ch: char) -> Option<Self> {
        match ch {
            '1' => Some(Self::Polygon),
            '2' => Some(Self::PolygonScale),
            '3' => Some(Self::VertexWeb),
            '4' => Some(Self::TweenClock),
            '5' => Some(Self::WallClock),
            '6' => Some(Self::FollowPath),
            '7' => Some(Self::FlipCard),
            _ => None,
        }
    }
}

/// Mutations noticed during a render pass, applied between frames so state
/// is never written while it is being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// The flip card crossed the edge-on line; `true` while the back shows.
    CardFlipped(bool),
}

/// The main application which holds the state and logic of the application.
struct App {
    /// Is the application running?
    running: bool,
    /// Animation clock origin; scenes see milliseconds since startup.
    started: Instant,
    config: Config,
    screen: Screen,
    polygon: PolygonScene,
    polygon_scale: PolygonScaleScene,
    vertex: VertexScene,
    tween_clock: TweenClockScene,
    flip: FlipScene,
    commands: CommandQueue<AppCommand>,
}

impl App {
    /// Construct a new instance of [`App`].
    fn new(config: Config) -> Self {
        Self {
            running: false,
            started: Instant::now(),
            config,
            screen: Screen::Menu,
            polygon: PolygonScene::new(),
            polygon_scale: PolygonScaleScene::new(),
            vertex: VertexScene::new(),
            tween_clock: TweenClockScene::new(),
            flip: FlipScene::new(),
            commands: CommandQueue::new(),
        }
    }

    /// Run the application's main loop.
    fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
            self.apply_commands();
        }
        Ok(())
    }

    /// Milliseconds since the app started, the time base every tween reads.
    fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Renders the current screen.
    fn render(&mut self, frame: &mut Frame) {
        let now_ms = self.elapsed_ms();
        let area = frame.area();
        let show_help = self.config.show_help;
        match self.screen {
            Screen::Menu => menu::render(frame, area),
            Screen::Polygon => self.polygon.render(frame, area, now_ms, show_help),
            Screen::PolygonScale => self.polygon_scale.render(frame, area, now_ms, show_help),
            Screen::VertexWeb => self.vertex.render(frame, area, now_ms, show_help),
            Screen::TweenClock => self.tween_clock.render(frame, area, now_ms, show_help),
            Screen::WallClock => wall::render(frame, area, show_help),
            Screen::FollowPath => follow::render(frame, area, now_ms, show_help, self.config.trail),
            Screen::FlipCard => {
                self.flip
                    .render(frame, area, now_ms, show_help, &mut self.commands);
            }
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with a timeout so animations keep ticking.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(Duration::from_millis(self.config.tick_ms))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('q')) => self.quit(),
            (_, KeyCode::Esc) => {
                if self.screen == Screen::Menu {
                    self.quit();
                } else {
                    self.screen = Screen::Menu;
                }
            }
            (_, KeyCode::Char(ch)) => self.on_char(ch),
            _ => {}
        }
    }

    /// Route a character key to the menu or the active scene.
    fn on_char(&mut self, ch: char) {
        if self.screen == Screen::Menu {
            if let Some(screen) = Screen::from_digit(ch) {
                self.screen = screen;
            }
            return;
        }

        let now_ms = self.elapsed_ms();
        let duration_ms = self.config.default_duration_ms;
        let easing = self.config.easing();
        match self.screen {
            Screen::Polygon => self.polygon.on_key(ch, duration_ms, easing, now_ms),
            Screen::PolygonScale => self.polygon_scale.on_key(ch, duration_ms, easing, now_ms),
            Screen::VertexWeb => self.vertex.on_key(ch, duration_ms, easing, now_ms),
            // clock presets carry their own durations
            Screen::TweenClock => self.tween_clock.on_key(ch, easing, now_ms),
            _ => {}
        }
    }

    /// Flush deferred mutations queued during the last render pass.
    fn apply_commands(&mut self) {
        for command in self.commands.drain() {
            match command {
                AppCommand::CardFlipped(flipped) => self.flip.set_flipped(flipped),
            }
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
