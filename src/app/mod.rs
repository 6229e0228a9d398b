//! Application module
//!
//! This module contains the main App struct: page state, the event loop and
//! top-level rendering. Key and mouse handling lives in `events.rs`.

mod events;

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use crossterm::event::{self, Event};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::io::Stdout;
use std::time::Duration;

use crate::config::{Config, ConfigLoader, ConfigValidator};
use crate::keybindings::{KeyAction, KeybindingResolver};
use crate::logging::{init_logging, SessionInfo};
use crate::ui::components::{
    render_hero, AppointmentForm, Header, HelpOverlay, StatusBar, SuccessModal,
};
use crate::ui::{AppLayout, Theme, ThemeProvider};

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppMode {
    Editing,
    Confirmation,
    Help,
}

/// Main application
pub struct App {
    // Configuration
    config: Config,

    // Shared theme; components borrow it at render time
    theme: ThemeProvider,

    // UI Components
    header: Header,
    form: AppointmentForm,
    status_bar: StatusBar,
    help_overlay: HelpOverlay,

    // State
    mode: AppMode,
    should_quit: bool,

    keybinding_resolver: KeybindingResolver,

    // Current layout for mouse click detection
    current_layout: Option<AppLayout>,

    clock: fn() -> NaiveDate,
}

/// Today's date in UTC, the calendar the earliest bookable day is counted in
fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

impl App {
    /// Load configuration, start logging and build the page.
    ///
    /// A broken config file or log path is not fatal: defaults are used and
    /// the problem is shown in the status bar.
    pub fn new(config_path: Option<&str>, theme_override: Option<Theme>) -> Self {
        let loaded = ConfigLoader::new(config_path).load();
        let (mut config, source, load_error) = match loaded {
            Ok(Some((source, config))) => (config, Some(source), None),
            Ok(None) => (Config::default(), None, None),
            Err(e) => (Config::default(), None, Some(e)),
        };
        if let Some(theme) = theme_override {
            config.theme = theme;
        }

        let session = SessionInfo {
            theme: config.theme,
            brand: &config.dealer.brand,
            config_source: source.as_deref(),
        };
        let logging_error = init_logging(&config.logging, &session).err();

        let mut app = Self::with_config(config);

        let mut warnings: Vec<String> = ConfigValidator::new(&app.config)
            .validate()
            .iter()
            .map(|w| format!("Config warning: {}", w))
            .collect();
        if let Some(e) = logging_error {
            warnings.insert(0, format!("Logging disabled: {:#}", e));
        }
        if let Some(e) = load_error {
            tracing::warn!(error = %format!("{:#}", e), "Failed to load config, using defaults");
            warnings.insert(0, format!("Config error: {:#}", e));
        }
        for warning in &warnings {
            tracing::warn!("{}", warning);
        }
        if let Some(first) = warnings.first() {
            app.status_bar.set_warning(first.clone());
        }

        app
    }

    /// Build the page from an already loaded configuration
    pub fn with_config(config: Config) -> Self {
        let keybinding_resolver = KeybindingResolver::from_config(config.keybindings.as_ref());

        let mut help_overlay = HelpOverlay::new();
        help_overlay.update_from_resolver(&keybinding_resolver);

        let clock: fn() -> NaiveDate = utc_today;

        Self {
            theme: ThemeProvider::new(config.theme),
            header: Header::new(&config.dealer.brand, &config.dealer.subtitle),
            form: AppointmentForm::new(clock()),
            status_bar: StatusBar::new(),
            help_overlay,
            mode: AppMode::Editing,
            should_quit: false,
            keybinding_resolver,
            current_layout: None,
            clock,
            config,
        }
    }

    /// Run the application event loop
    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|frame| self.render(frame))?;

            if event::poll(Duration::from_millis(100))? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key.code, key.modifiers),
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {}
                }
            }

            if self.should_quit {
                break;
            }
        }

        tracing::info!(unsent = !self.form.record().is_empty(), "Exiting");
        Ok(())
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let layout = AppLayout::calculate(frame.area());
        self.current_layout = Some(layout);

        frame.render_widget(
            ratatui::widgets::Block::default().style(self.theme.styles().page),
            frame.area(),
        );

        let toggle_key = self.binding(KeyAction::ToggleTheme);
        self.header
            .render(frame, layout.header, &self.theme, &toggle_key);
        render_hero(frame, layout.hero, &self.theme);

        self.form
            .render(frame, layout.form, &self.theme, self.mode == AppMode::Editing);

        self.status_bar
            .render(frame, layout.status_bar, &self.theme, &self.hints());

        SuccessModal::render(
            frame,
            frame.area(),
            &self.theme,
            self.mode == AppMode::Confirmation,
        );

        if self.mode == AppMode::Help {
            self.help_overlay.render(frame, frame.area(), &self.theme);
        }
    }

    /// Display text of an action's key, "-" once other actions took all of them
    fn binding(&self, action: KeyAction) -> String {
        self.keybinding_resolver
            .get_binding_display(action)
            .unwrap_or("-")
            .to_string()
    }

    /// Key hints shown in the status bar when there is no message
    fn hints(&self) -> String {
        format!(
            "{} sonraki alan · {} gönder · {} tema · {} yardım · {} çıkış",
            self.binding(KeyAction::NextField),
            self.binding(KeyAction::Submit),
            self.binding(KeyAction::ToggleTheme),
            self.binding(KeyAction::Help),
            self.binding(KeyAction::Quit),
        )
    }

    #[allow(dead_code)]
    pub fn is_confirmation_open(&self) -> bool {
        self.mode == AppMode::Confirmation
    }

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    #[allow(dead_code)]
    pub fn form(&self) -> &AppointmentForm {
        &self.form
    }

    /// Validate the form; open the confirmation or point at the problem
    fn submit(&mut self) {
        self.form.set_today((self.clock)());
        match self.form.submit() {
            Ok(()) => {
                self.status_bar.clear();
                self.mode = AppMode::Confirmation;
                tracing::info!("Appointment request accepted");
            }
            Err(violation) => {
                tracing::debug!(field = ?violation.field(), "Submission rejected: {}", violation);
                self.status_bar.set_error(violation.to_string());
            }
        }
    }

    fn toggle_theme(&mut self) {
        let theme = self.theme.toggle();
        tracing::debug!(?theme, "Theme toggled");
    }

    /// Close the confirmation; the already reset form stays as it is
    fn dismiss(&mut self) {
        if self.mode == AppMode::Confirmation {
            self.mode = AppMode::Editing;
            tracing::debug!("Confirmation dismissed");
        }
    }
}
