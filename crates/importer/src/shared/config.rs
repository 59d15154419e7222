use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub import: ImportConfig,
    #[serde(default)]
    pub template: TemplateConfig,
}

/// Подключение к REST API полисов
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    /// Bearer-токен; без него запросы идут без авторизации
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ImportConfig {
    /// CSV-файл для импорта; если пусто, импорт не выполняется
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub policy_id: String,
    #[serde(default)]
    pub default_category_id: Option<String>,
    #[serde(default = "default_max_displayed_errors")]
    pub max_displayed_errors: usize,
    #[serde(default = "default_success_reset_delay_ms")]
    pub success_reset_delay_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TemplateConfig {
    #[serde(default)]
    pub write: bool,
    #[serde(default = "default_template_dir")]
    pub output_dir: String,
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_max_displayed_errors() -> usize {
    5
}

fn default_success_reset_delay_ms() -> u64 {
    2000
}

fn default_template_dir() -> String {
    ".".to_string()
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            file: None,
            policy_id: String::new(),
            default_category_id: None,
            max_displayed_errors: default_max_displayed_errors(),
            success_reset_delay_ms: default_success_reset_delay_ms(),
        }
    }
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            write: false,
            output_dir: default_template_dir(),
        }
    }
}

/// Конфигурация по умолчанию, встроенная в бинарник
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://127.0.0.1:8080"
timeout_secs = 120

[import]
max_displayed_errors = 5
success_reset_delay_ms = 2000

[template]
write = true
output_dir = "."
"#;

/// Загрузка конфигурации из config.toml
///
/// Порядок поиска:
/// 1. Рядом с исполняемым файлом
/// 2. Встроенная конфигурация по умолчанию
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                return load_config_from(&config_path);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

pub fn load_config_from(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    Ok(config)
}

/// Относительный путь из конфигурации разрешается от директории исполняемого файла
pub fn resolve_path(configured: &str) -> PathBuf {
    let path = Path::new(configured);

    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(path);
        }
    }

    PathBuf::from(configured)
}
