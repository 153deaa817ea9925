//! Dark-theme preference with system fallback.

use crate::error::PreferenceError;
use crate::store::KeyValueStore;

/// Key under which the explicit choice is persisted.
pub const DARK_MODE_KEY: &str = "backfocus-dark-mode";

/// Theme preference bound to a store.
///
/// Until the user toggles explicitly, the applied theme follows the system
/// signal, including live changes. Once a value is persisted, system
/// changes are ignored.
#[derive(Debug)]
pub struct ThemePreference<S: KeyValueStore> {
    store: S,
    system_dark: bool,
    applied: bool,
}

impl<S: KeyValueStore> ThemePreference<S> {
    /// Bind to `store`; `system_dark` is the current system signal (false
    /// when unavailable).
    pub fn new(store: S, system_dark: bool) -> Self {
        let mut pref = Self {
            store,
            system_dark,
            applied: false,
        };
        pref.applied = pref.read();
        pref
    }

    /// Persisted choice if any, otherwise the system signal.
    #[must_use]
    pub fn read(&self) -> bool {
        match self.persisted() {
            Some(value) => value,
            None => self.system_dark,
        }
    }

    /// The persisted choice, if the user has made one.
    #[must_use]
    pub fn persisted(&self) -> Option<bool> {
        self.store.get(DARK_MODE_KEY).map(|v| v == "true")
    }

    /// Whether an explicit choice is persisted.
    #[must_use]
    pub fn is_explicit(&self) -> bool {
        self.persisted().is_some()
    }

    /// Theme currently applied to the display.
    #[must_use]
    pub fn applied(&self) -> bool {
        self.applied
    }

    /// Persist `dark` and apply it immediately.
    ///
    /// The applied state changes even if persisting fails.
    pub fn write(&mut self, dark: bool) -> Result<(), PreferenceError> {
        self.applied = dark;
        self.store
            .set(DARK_MODE_KEY, if dark { "true" } else { "false" })?;
        tracing::info!(dark, "theme preference saved");
        Ok(())
    }

    /// Flip the applied theme and persist it. Returns the new value.
    pub fn toggle(&mut self) -> Result<bool, PreferenceError> {
        let dark = !self.applied;
        self.write(dark)?;
        Ok(dark)
    }

    /// Feed a system scheme notification. Returns true when the applied
    /// theme changed.
    pub fn on_system_change(&mut self, dark: bool) -> bool {
        self.system_dark = dark;
        if self.is_explicit() {
            return false;
        }
        let changed = self.applied != dark;
        self.applied = dark;
        changed
    }

    /// Forget the explicit choice and follow the system again.
    pub fn clear(&mut self) -> Result<(), PreferenceError> {
        self.store.remove(DARK_MODE_KEY)?;
        self.applied = self.system_dark;
        tracing::info!("theme preference cleared");
        Ok(())
    }
}
