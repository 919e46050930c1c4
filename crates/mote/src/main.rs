use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use mote_config::Config;
use mote_core::Pointer;
use mote_scene::Scene;
use ratatui::layout::Rect;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::{DefaultTerminal, Frame};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load()?;
    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}

/// The main application: the animation driver plus input state.
pub struct App {
    /// The frame loop keeps going while this is set.
    running: bool,
    /// Latest pointer position in scene coordinates.
    pointer: Pointer,
    /// Whether the pointer influences particles and shapes.
    pointer_effects: bool,
    /// Whether the key hints line is drawn.
    show_help: bool,
    /// Time budget per frame, from the configured fps.
    frame_budget: Duration,
    /// Layer populations and their reseed logic.
    scene: Scene,
}

impl App {
    /// Construct a new instance of [`App`] from the loaded config.
    pub fn new(config: Config) -> Self {
        Self {
            running: false,
            pointer: Pointer::OFFSCREEN,
            pointer_effects: config.pointer_effects,
            show_help: config.show_help,
            frame_budget: config.frame_budget(),
            scene: Scene::new(config.theme.into()),
        }
    }

    /// Run the application's main loop with mouse capture enabled.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        execute!(io::stdout(), EnableMouseCapture)?;
        let result = self.frame_loop(&mut terminal);
        let uncapture = execute!(io::stdout(), DisableMouseCapture);
        result?;
        uncapture?;
        Ok(())
    }

    /// Draw frames at the configured pace until quit.
    fn frame_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Renders one frame: the backdrop canvas with the help line on top.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.scene
            .render(frame, area, self.pointer, self.pointer_effects);

        if self.show_help && area.height > 0 {
            let help_area = Rect::new(area.x, area.bottom() - 1, area.width, 1);
            frame.render_widget(self.help_line(), help_area);
        }
    }

    /// Key hints with the current theme and pointer state.
    fn help_line(&self) -> Line<'static> {
        let accent = self.scene.theme().palette().accent;
        let pointer_state = if self.pointer_effects { "on" } else { "off" };
        Line::from(vec![
            "q".bold().fg(accent),
            " quit  ".dark_gray(),
            "t".bold().fg(accent),
            format!(" theme ({})  ", self.scene.theme().name()).dark_gray(),
            "m".bold().fg(accent),
            format!(" pointer ({pointer_state})  ").dark_gray(),
            "r".bold().fg(accent),
            " reseed  ".dark_gray(),
            "h".bold().fg(accent),
            " hide".dark_gray(),
        ])
        .centered()
    }

    /// Reads crossterm events until the next frame is due, so the draw
    /// cadence holds steady whether or not input arrives.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let deadline = Instant::now() + self.frame_budget;
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                return Ok(());
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                // The next frame reseeds from the new dimensions on its own.
                Event::Resize(_, _) => {}
                _ => {}
            }
            if !self.running || Instant::now() >= deadline {
                return Ok(());
            }
        }
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('t')) => self.toggle_theme(),
            (_, KeyCode::Char('m')) => self.pointer_effects = !self.pointer_effects,
            (_, KeyCode::Char('r')) => self.scene.invalidate(),
            (_, KeyCode::Char('h')) => self.show_help = !self.show_help,
            _ => {}
        }
    }

    /// Tracks pointer motion; every other mouse event is ignored.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.pointer = Pointer::from_cell(mouse.column, mouse.row, self.scene.viewport());
            }
            _ => {}
        }
    }

    /// Toggle between the dark and light theme.
    fn toggle_theme(&mut self) {
        let next = self.scene.theme().toggle();
        self.scene.set_theme(next);
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
