use serde::{Deserialize, Serialize};

/// Результат выполнения UseCase
pub type UseCaseResult<T> = Result<T, UseCaseError>;

/// Ошибка выполнения UseCase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseCaseError {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

impl UseCaseError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Файл не удалось разобрать целиком
    pub fn structural(message: impl Into<String>) -> Self {
        Self::new("STRUCTURAL_ERROR", message)
    }

    /// Пакетный запрос к API полиса завершился ошибкой
    pub fn submission(message: impl Into<String>) -> Self {
        Self::new("SUBMISSION_ERROR", message)
    }

    /// Операция недопустима в текущем состоянии сессии импорта
    pub fn session(message: impl Into<String>) -> Self {
        Self::new("SESSION_ERROR", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }
}

impl std::fmt::Display for UseCaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(details) = &self.details {
            write!(f, ": {}", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for UseCaseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_details() {
        let err = UseCaseError::submission("Bulk import failed").with_details("HTTP 500");
        assert_eq!(err.to_string(), "[SUBMISSION_ERROR] Bulk import failed: HTTP 500");
    }
}
