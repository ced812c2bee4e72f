//! Process-wide list settings, initialised once at startup.

use once_cell::sync::{Lazy, OnceCell};

use crate::config::Config;

static SETTINGS: OnceCell<Config> = OnceCell::new();
static DEFAULT_SETTINGS: Lazy<Config> = Lazy::new(Config::default);

/// Установить настройки процесса. Повторный вызов игнорируется.
pub fn init(config: Config) -> bool {
    match SETTINGS.set(config) {
        Ok(()) => {
            tracing::info!("List settings initialized");
            true
        }
        Err(_) => {
            tracing::warn!("List settings already initialized, ignoring");
            false
        }
    }
}

/// Текущие настройки; до `init` — встроенные значения по умолчанию
pub fn get() -> &'static Config {
    SETTINGS.get().unwrap_or_else(|| &*DEFAULT_SETTINGS)
}

/// Предпочтения отображения списка, принадлежащие слою рендеринга
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewPreferences {
    /// true — таблица, false — карточки
    pub table_mode: bool,
}

impl ViewPreferences {
    pub fn from_config(config: &Config) -> Self {
        Self {
            table_mode: config.view.table_mode,
        }
    }

    pub fn toggle(&mut self) {
        self.table_mode = !self.table_mode;
    }
}

impl Default for ViewPreferences {
    fn default() -> Self {
        Self::from_config(get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferences_from_config() {
        let mut config = Config::default();
        assert!(!ViewPreferences::from_config(&config).table_mode);
        config.view.table_mode = true;
        assert!(ViewPreferences::from_config(&config).table_mode);
    }

    #[test]
    fn test_second_init_is_ignored() {
        let config = Config::default();
        init(config.clone());
        assert!(!init(config));
        assert_eq!(get().pagination.default_page_size, 50);
        assert_eq!(ViewPreferences::default(), ViewPreferences::from_config(get()));
    }

    #[test]
    fn test_toggle_table_mode() {
        let mut prefs = ViewPreferences { table_mode: false };
        prefs.toggle();
        assert!(prefs.table_mode);
    }
}
