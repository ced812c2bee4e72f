use serde::Deserialize;
use std::path::Path;

use crate::sort::MissingKeys;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub sorting: SortingConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PaginationConfig {
    pub default_page_size: u32,
    pub page_size_options: Vec<u32>,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct SortingConfig {
    /// Место записей без сортируемого значения
    #[serde(default)]
    pub missing_keys: MissingKeys,
}

/// Настройки отображения списков (карточки или таблица)
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct ViewConfig {
    #[serde(default)]
    pub table_mode: bool,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[pagination]
default_page_size = 50
page_size_options = [50, 100, 200, 500]

[sorting]
missing_keys = "lowest"

[view]
table_mode = false
"#;

const CONFIG_FILE_NAME: &str = "listing.toml";

impl Config {
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        let pagination = &self.pagination;
        if pagination.default_page_size == 0 {
            anyhow::bail!("pagination.default_page_size must be greater than zero");
        }
        if pagination.page_size_options.iter().any(|&size| size == 0) {
            anyhow::bail!("pagination.page_size_options must not contain zero");
        }
        if !pagination.page_size_options.is_empty()
            && !pagination
                .page_size_options
                .contains(&pagination.default_page_size)
        {
            anyhow::bail!(
                "pagination.default_page_size {} is not one of page_size_options {:?}",
                pagination.default_page_size,
                pagination.page_size_options
            );
        }
        Ok(())
    }

    /// Размер страницы из запроса, если он допустим, иначе значение по умолчанию
    pub fn page_size_or_default(&self, requested: Option<u32>) -> u32 {
        match requested {
            Some(size) if size > 0 => {
                let options = &self.pagination.page_size_options;
                if options.is_empty() || options.contains(&size) {
                    size
                } else {
                    tracing::warn!("Page size {} is not allowed, using default", size);
                    self.pagination.default_page_size
                }
            }
            _ => self.pagination.default_page_size,
        }
    }
}

/// Совпадает с `DEFAULT_CONFIG`
impl Default for Config {
    fn default() -> Self {
        Self {
            pagination: PaginationConfig {
                default_page_size: 50,
                page_size_options: vec![50, 100, 200, 500],
            },
            sorting: SortingConfig::default(),
            view: ViewConfig::default(),
        }
    }
}

/// Load configuration from a TOML file
pub fn load_config_from(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading listing config from: {}", path.display());
    let contents = std::fs::read_to_string(path)?;
    Config::from_toml_str(&contents)
}

/// Load configuration from listing.toml
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join(CONFIG_FILE_NAME);

            if config_path.exists() {
                return load_config_from(&config_path);
            } else {
                tracing::warn!("{} not found at: {}", CONFIG_FILE_NAME, config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded listing configuration");
    Config::from_toml_str(DEFAULT_CONFIG)
}
