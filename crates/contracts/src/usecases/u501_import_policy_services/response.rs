use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportStatus {
    /// Пакет принят API полиса
    Completed,
    /// Пакетный запрос завершился ошибкой целиком
    Failed,
}

/// Итог одного пакетного импорта
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    pub session_id: String,
    pub policy_id: String,
    pub status: ImportStatus,
    /// Количество записей, созданных по ответу backend
    pub created_count: usize,
    pub message: String,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

impl ImportResult {
    pub fn is_success(&self) -> bool {
        self.status == ImportStatus::Completed
    }
}
