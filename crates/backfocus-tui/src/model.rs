//! TUI application model (Elm architecture).

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::Block;
use ratatui::Terminal;

use backfocus_core::{
    AppState, BackfocusError, Calculator, ComponentField, ModelRegistry, Report,
};
use backfocus_prefs::{KeyValueStore, SchemeSource, ThemePreference};

use crate::fields::Field;
use crate::footer::render_footer;
use crate::form::render_form;
use crate::header::render_header;
use crate::keymap::{map_key, KeyAction};
use crate::messages::TuiMessage;
use crate::results::render_results;
use crate::styles::ColorTheme;

/// TUI application state (Elm Model).
pub struct TuiApp<S: KeyValueStore> {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Raw field values.
    pub state: AppState,
    /// Report of the last calculation pass.
    pub report: Report,
    /// Focused field.
    pub focus: Field,
    /// One-off message shown in the footer until the next key press.
    pub notice: Option<String>,
    registry: ModelRegistry,
    calculator: Calculator,
    preference: ThemePreference<S>,
    scheme: Box<dyn SchemeSource>,
}

impl<S: KeyValueStore> TuiApp<S> {
    /// Create the app and run the first calculation pass.
    ///
    /// Fails when `state` names a model the registry does not know.
    pub fn new(
        state: AppState,
        preference: ThemePreference<S>,
        scheme: Box<dyn SchemeSource>,
    ) -> Result<Self, BackfocusError> {
        Self::with_calculator(state, Calculator::default(), preference, scheme)
    }

    /// Create the app with custom calculator options.
    pub fn with_calculator(
        state: AppState,
        calculator: Calculator,
        preference: ThemePreference<S>,
        scheme: Box<dyn SchemeSource>,
    ) -> Result<Self, BackfocusError> {
        let registry = ModelRegistry::builtin();
        let report = state.evaluate(&registry, &calculator)?.report;
        Ok(Self {
            should_quit: false,
            state,
            report,
            focus: Field::TelescopeBackfocus,
            notice: None,
            registry,
            calculator,
            preference,
            scheme,
        })
    }

    /// Whether the dark theme is applied.
    #[must_use]
    pub fn dark_mode(&self) -> bool {
        self.preference.applied()
    }

    #[must_use]
    pub fn preference(&self) -> &ThemePreference<S> {
        &self.preference
    }

    /// Colours for the applied theme.
    #[must_use]
    pub fn color_theme(&self) -> ColorTheme {
        ColorTheme::for_dark_mode(self.dark_mode())
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::KeyPress(action) => {
                self.handle_key_action(action);
            }
            TuiMessage::Resize { width, height } => {
                // The terminal picks up the new size on the next draw.
                tracing::debug!(width, height, "terminal resized");
            }
            TuiMessage::Tick => {
                self.poll_system_scheme();
            }
            TuiMessage::SystemScheme(dark) => {
                if self.preference.on_system_change(dark) {
                    tracing::debug!(dark, "following system colour scheme");
                }
            }
            TuiMessage::Quit => {
                self.should_quit = true;
            }
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        if action != KeyAction::None {
            self.notice = None;
        }
        let rows = self.state.components.len();
        match action {
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::NextField => {
                self.focus = self.focus.next(rows);
            }
            KeyAction::PrevField => {
                self.focus = self.focus.previous(rows);
            }
            KeyAction::Input(c) => {
                if c == ' ' && !self.focus.is_text() {
                    self.cycle_option(true);
                } else if self.focus.accepts(c) {
                    self.edit_focused(|text| text.push(c));
                }
            }
            KeyAction::Backspace => {
                self.edit_focused(|text| {
                    text.pop();
                });
            }
            KeyAction::ClearField => {
                self.edit_focused(String::clear);
            }
            KeyAction::PrevOption => {
                self.cycle_option(false);
            }
            KeyAction::NextOption => {
                self.cycle_option(true);
            }
            KeyAction::AddComponent => {
                self.add_component();
            }
            KeyAction::RemoveComponent => {
                self.remove_component();
            }
            KeyAction::ToggleTheme => {
                self.toggle_theme();
            }
            KeyAction::None => {}
        }
    }

    /// Re-read the whole state and replace the cached report.
    pub fn recompute(&mut self) {
        match self.state.evaluate(&self.registry, &self.calculator) {
            Ok(evaluation) => self.report = evaluation.report,
            Err(err) => {
                tracing::warn!(%err, "calculation skipped");
                self.notice = Some(err.to_string());
            }
        }
    }

    /// Ask the scheme source for the current system signal.
    pub fn poll_system_scheme(&mut self) {
        if let Some(dark) = self.scheme.prefers_dark() {
            self.handle_message(TuiMessage::SystemScheme(dark));
        }
    }

    fn field_text(&self, field: Field) -> Option<String> {
        match field {
            Field::TelescopeBackfocus => Some(self.state.telescope_backfocus.clone()),
            Field::ComponentName(row) => self.state.components.at(row).map(|c| c.name.clone()),
            Field::ComponentLength(row) => {
                self.state.components.at(row).map(|c| c.length.clone())
            }
            Field::GuiderInner => Some(self.state.guider_inner().to_string()),
            Field::ImagerReading => Some(self.state.imager_reading().to_string()),
            Field::GuiderReading => Some(self.state.guider_reading.clone()),
            Field::Model | Field::Corrector => None,
        }
    }

    fn set_field_text(&mut self, field: Field, text: String) {
        match field {
            Field::TelescopeBackfocus => self.state.telescope_backfocus = text,
            Field::ComponentName(row) => self.update_component(row, ComponentField::Name(text)),
            Field::ComponentLength(row) => {
                self.update_component(row, ComponentField::Length(text));
            }
            Field::GuiderInner => self.state.set_guider_inner(text),
            Field::ImagerReading => self.state.set_imager_reading(text),
            Field::GuiderReading => self.state.guider_reading = text,
            Field::Model | Field::Corrector => {}
        }
    }

    fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(mut text) = self.field_text(self.focus) else {
            return;
        };
        edit(&mut text);
        self.set_field_text(self.focus, text);
        self.recompute();
    }

    fn update_component(&mut self, row: usize, field: ComponentField) {
        let Some(id) = self.state.components.at(row).map(|c| c.id.clone()) else {
            return;
        };
        if let Err(err) = self.state.components.update(&id, field) {
            tracing::warn!(%err, "component update failed");
        }
    }

    fn cycle_option(&mut self, forward: bool) {
        match self.focus {
            Field::Model => {
                let model = if forward {
                    self.registry.next_after(&self.state.model_id)
                } else {
                    self.registry.previous_before(&self.state.model_id)
                };
                self.state.model_id = model.id.to_string();
                self.recompute();
            }
            Field::Corrector => {
                self.state.use_corrector = !self.state.use_corrector;
                self.recompute();
            }
            _ => {}
        }
    }

    fn add_component(&mut self) {
        self.state.components.add("", 0.0);
        self.focus = Field::ComponentName(self.state.components.len() - 1);
        self.recompute();
    }

    fn remove_component(&mut self) {
        let Some(row) = self.focus.component_row() else {
            self.notice = Some("Select a component row to remove it".to_string());
            return;
        };
        let Some(id) = self.state.components.at(row).map(|c| c.id.clone()) else {
            return;
        };
        self.state.components.remove(&id);
        let rows = self.state.components.len();
        self.focus = if rows == 0 {
            Field::Model
        } else {
            Field::ComponentName(row.min(rows - 1))
        };
        self.recompute();
    }

    fn toggle_theme(&mut self) {
        match self.preference.toggle() {
            Ok(dark) => tracing::debug!(dark, "theme toggled"),
            Err(err) => {
                tracing::warn!(%err, "theme preference not saved");
                self.notice = Some(format!("Theme preference not saved: {err}"));
            }
        }
    }

    /// Compute the layout.
    ///
    /// Returns (header, form, results, footer) rects.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect, Rect) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // header
                Constraint::Min(10),   // main content
                Constraint::Length(2), // footer
            ])
            .split(area);

        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(55), // form
                Constraint::Percentage(45), // results
            ])
            .split(outer[1]);

        (outer[0], main[0], main[1], outer[2])
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let theme = self.color_theme();
        frame.render_widget(Block::default().style(theme.base_style()), frame.area());

        let (header_area, form_area, results_area, footer_area) =
            Self::compute_layout(frame.area());

        let model_label = self
            .registry
            .get(&self.state.model_id)
            .map_or(self.state.model_id.as_str(), |m| m.label);
        render_header(frame, header_area, model_label, self.dark_mode(), &theme);
        render_form(
            frame,
            form_area,
            &self.state,
            &self.registry,
            self.focus,
            &theme,
        );
        render_results(frame, results_area, &self.report, &theme);
        render_footer(frame, footer_area, self.notice.as_deref(), &theme);
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// The terminal is restored even when the loop fails.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        Self::teardown_terminal(&mut terminal)?;
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let tick_rate = Duration::from_millis(250);
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                return Ok(());
            }

            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                        self.handle_message(TuiMessage::KeyPress(map_key(key_event)));
                    }
                    Event::Resize(width, height) => {
                        self.handle_message(TuiMessage::Resize { width, height });
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= tick_rate {
                self.handle_message(TuiMessage::Tick);
                last_tick = Instant::now();
            }
        }
    }
}
