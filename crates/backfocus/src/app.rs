//! Application entry point and dispatch.

use std::io::{self, Write};

use anyhow::{Context, Result};

use backfocus_cli::{JsonPresenter, ReportPresenter, TextPresenter};
use backfocus_core::{AppState, Calculator, ModelRegistry};
use backfocus_prefs::{
    EnvScheme, JsonFileStore, KeyValueStore, MemoryStore, PreferenceError, SchemeSource,
    ThemePreference,
};
use backfocus_tui::TuiApp;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        backfocus_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    if config.list_models {
        let mut out = io::stdout().lock();
        presenter(config).present_models(&ModelRegistry::builtin(), &mut out)?;
        return Ok(());
    }

    if config.theme_command() {
        return run_theme(config);
    }

    // Handle TUI mode
    if config.tui {
        return run_tui(config);
    }

    // CLI mode
    run_cli(config)
}

fn presenter(config: &AppConfig) -> Box<dyn ReportPresenter> {
    if config.json {
        Box::new(JsonPresenter)
    } else {
        Box::new(TextPresenter::new(config.quiet))
    }
}

fn open_store(config: &AppConfig) -> Result<JsonFileStore, PreferenceError> {
    match &config.prefs_file {
        Some(path) => Ok(JsonFileStore::open(path.clone())),
        None => JsonFileStore::open_default(),
    }
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let registry = ModelRegistry::builtin();
    let state = config.to_state(&registry)?;
    let evaluation = state.evaluate(&registry, &Calculator::default())?;
    tracing::debug!(
        model = %state.model_id,
        components = state.components.len(),
        status = evaluation.outputs.main_verdict.status.label(),
        "report ready"
    );

    let mut out = io::stdout().lock();
    presenter(config).present_report(&state, &evaluation.report, &mut out)?;
    out.flush()?;
    Ok(())
}

fn run_theme(config: &AppConfig) -> Result<()> {
    let store = open_store(config)?;
    let system_dark = EnvScheme.prefers_dark().unwrap_or(false);
    let mut preference = ThemePreference::new(store, system_dark);

    if let Some(dark) = config.set_dark_mode {
        preference
            .write(dark)
            .context("could not save the theme preference")?;
    }
    if config.clear_dark_mode {
        preference
            .clear()
            .context("could not clear the theme preference")?;
    }

    let mut out = io::stdout().lock();
    presenter(config).present_theme(preference.applied(), preference.is_explicit(), &mut out)?;
    Ok(())
}

fn run_tui(config: &AppConfig) -> Result<()> {
    let registry = ModelRegistry::builtin();
    let state = config.to_state(&registry)?;
    let system_dark = EnvScheme.prefers_dark().unwrap_or(false);

    match open_store(config) {
        Ok(store) => launch_tui(state, store, system_dark),
        Err(err) => {
            tracing::warn!(%err, "theme preference will not be saved");
            launch_tui(state, MemoryStore::new(), system_dark)
        }
    }
}

fn launch_tui<S: KeyValueStore>(
    state: AppState,
    store: S,
    system_dark: bool,
) -> Result<()> {
    let preference = ThemePreference::new(store, system_dark);
    let mut app = TuiApp::new(state, preference, Box::new(EnvScheme))?;
    app.run()?;
    Ok(())
}
