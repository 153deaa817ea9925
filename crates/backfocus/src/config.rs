//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use backfocus_core::{parse_component_spec, AppState, BackfocusError, ModelRegistry};

/// Backfocus: ONAG main spacer and parfocal spacer calculator.
///
/// Numeric values are millimetres. Values that are not numbers count as 0.
#[derive(Parser, Debug)]
#[command(name = "backfocus", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Telescope backfocus in mm.
    #[arg(
        short,
        long,
        default_value = "260.096",
        env = "BACKFOCUS_MM",
        allow_hyphen_values = true
    )]
    pub backfocus: String,

    /// ONAG model id (see --list-models).
    #[arg(short, long, default_value = "SC", env = "BACKFOCUS_MODEL")]
    pub model: String,

    /// Extra component in the optical path as NAME=LENGTH (repeatable).
    #[arg(short, long = "component", value_name = "NAME=LEN")]
    pub components: Vec<String>,

    /// Inner backfocus reading on the ONAG (mirrors --imager-bf).
    #[arg(long, value_name = "MM", allow_hyphen_values = true)]
    pub guider_inner: Option<String>,

    /// Imager backfocus reading (mirrors --guider-inner).
    #[arg(long, value_name = "MM", allow_hyphen_values = true)]
    pub imager_bf: Option<String>,

    /// Guider backfocus reading.
    #[arg(long, value_name = "MM", allow_hyphen_values = true)]
    pub guider_bf: Option<String>,

    /// A reducer/corrector shortens the base focus offset by 3 mm.
    #[arg(long)]
    pub corrector: bool,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Quiet mode (summary only).
    #[arg(short, long)]
    pub quiet: bool,

    /// Launch the interactive form.
    #[arg(long)]
    pub tui: bool,

    /// List the known ONAG models.
    #[arg(long)]
    pub list_models: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,

    /// Preference file path.
    #[arg(long, env = "BACKFOCUS_PREFS", value_name = "PATH")]
    pub prefs_file: Option<PathBuf>,

    /// Save the dark theme preference.
    #[arg(long, value_name = "BOOL")]
    pub set_dark_mode: Option<bool>,

    /// Forget the saved theme and follow the terminal.
    #[arg(long, conflicts_with = "set_dark_mode")]
    pub clear_dark_mode: bool,

    /// Print the theme that applies.
    #[arg(long)]
    pub show_theme: bool,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Whether a theme command was requested.
    #[must_use]
    pub fn theme_command(&self) -> bool {
        self.set_dark_mode.is_some() || self.clear_dark_mode || self.show_theme
    }

    /// Build the form state from the flags.
    ///
    /// `--imager-bf` is applied after `--guider-inner`, so it wins when both
    /// are given.
    pub fn to_state(&self, registry: &ModelRegistry) -> Result<AppState, BackfocusError> {
        let mut state = AppState::new();
        state.telescope_backfocus.clone_from(&self.backfocus);
        state.select_model(registry, &self.model)?;
        for spec in &self.components {
            let (name, length) = parse_component_spec(spec)?;
            state.components.add(name, length);
        }
        if let Some(inner) = &self.guider_inner {
            state.set_guider_inner(inner.as_str());
        }
        if let Some(imager) = &self.imager_bf {
            state.set_imager_reading(imager.as_str());
        }
        if let Some(guider) = &self.guider_bf {
            state.guider_reading.clone_from(guider);
        }
        state.use_corrector = self.corrector;
        Ok(state)
    }
}
