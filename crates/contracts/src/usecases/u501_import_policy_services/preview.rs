use crate::domain::a001_policy_service::ServiceDraft;
use serde::{Deserialize, Serialize};

/// Где ожидаемая колонка найдена в заголовке файла
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnMapping {
    /// Нормализованное имя колонки (в нижнем регистре)
    pub expected: String,
    /// Позиция в заголовке, если колонка есть
    pub file_index: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowErrorKind {
    MissingServiceName,
    InvalidPrice,
}

/// Отклонение одной строки данных
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowError {
    /// Номер строки данных с 1 (заголовок не считается)
    pub row: usize,
    pub kind: RowErrorKind,
    pub message: String,
}

impl RowError {
    pub fn missing_service_name(row: usize) -> Self {
        Self {
            row,
            kind: RowErrorKind::MissingServiceName,
            message: format!("Row {}: service name is required", row),
        }
    }

    pub fn invalid_price(row: usize, raw: &str) -> Self {
        Self {
            row,
            kind: RowErrorKind::InvalidPrice,
            message: format!("Row {}: invalid price '{}'", row, raw),
        }
    }
}

impl std::fmt::Display for RowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Результат разбора и проверки файла, показывается до подтверждения импорта
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportPreview {
    pub file_name: String,
    pub column_mapping: Vec<ColumnMapping>,
    /// Колонки заголовка, которых нет в схеме услуги
    pub unknown_headers: Vec<String>,
    pub accepted: Vec<ServiceDraft>,
    pub row_errors: Vec<RowError>,
    /// Заполняется, если файл не разобран целиком; `accepted` тогда пуст
    pub structural_error: Option<String>,
}

impl ImportPreview {
    pub fn failed(file_name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            structural_error: Some(error.into()),
            ..Default::default()
        }
    }

    pub fn can_import(&self) -> bool {
        self.structural_error.is_none() && !self.accepted.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.row_errors.is_empty() || !self.unknown_headers.is_empty()
    }

    /// Сообщения об ошибках строк, не больше `limit`; остальные сводятся к счётчику
    pub fn error_lines(&self, limit: usize) -> Vec<String> {
        let mut lines: Vec<String> = self
            .row_errors
            .iter()
            .take(limit)
            .map(|e| e.message.clone())
            .collect();

        let hidden = self.row_errors.len().saturating_sub(limit);
        if hidden > 0 {
            lines.push(format!("... and {} more", hidden));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preview_with_errors(count: usize) -> ImportPreview {
        ImportPreview {
            file_name: "services.csv".into(),
            row_errors: (1..=count).map(RowError::missing_service_name).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_error_lines_are_capped() {
        let lines = preview_with_errors(7).error_lines(5);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Row 1: service name is required");
        assert_eq!(lines[5], "... and 2 more");
    }

    #[test]
    fn test_error_lines_without_overflow() {
        let lines = preview_with_errors(3).error_lines(5);
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| !l.starts_with("...")));
    }

    #[test]
    fn test_failed_preview_cannot_import() {
        let preview = ImportPreview::failed("a.csv", "Missing required columns: price");
        assert!(!preview.can_import());
        assert!(preview.accepted.is_empty());
    }
}
