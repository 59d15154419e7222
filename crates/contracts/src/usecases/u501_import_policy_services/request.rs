use serde::{Deserialize, Serialize};

/// Запрос на импорт услуг в полис
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRequest {
    /// Целевой полис
    pub policy_id: String,

    /// Категория для строк без (известной) категории; пустая строка означает отсутствие категории
    #[serde(default)]
    pub default_category_id: Option<String>,
}

impl ImportRequest {
    pub fn new(policy_id: impl Into<String>) -> Self {
        Self {
            policy_id: policy_id.into(),
            default_category_id: None,
        }
    }

    pub fn with_default_category(mut self, category_id: impl Into<String>) -> Self {
        self.default_category_id = Some(category_id.into());
        self
    }

    /// Категория по умолчанию; пустой id считается отсутствующим
    pub fn default_category(&self) -> Option<&str> {
        self.default_category_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}
