use contracts::usecases::common::UseCaseError;
use thiserror::Error;

/// Ошибки импорта услуг полиса
#[derive(Debug, Error)]
pub enum ImportError {
    // Структурные: файл целиком непригоден
    #[error("File is empty")]
    EmptyFile,

    #[error("Missing required columns: {}", .missing.join(", "))]
    MissingHeaders { missing: Vec<String> },

    #[error("Cannot decode file '{0}' as UTF-8 text")]
    Unreadable(String),

    #[error("Cannot read file '{name}': {reason}")]
    FileAccess { name: String, reason: String },

    #[error("Cannot write file '{name}': {reason}")]
    FileWrite { name: String, reason: String },

    // Отправка: пакетный запрос не выполнен целиком
    #[error("Policy API returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Unexpected response from policy API: {0}")]
    Decode(String),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl ImportError {
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ImportError::EmptyFile
                | ImportError::MissingHeaders { .. }
                | ImportError::Unreadable(_)
                | ImportError::FileAccess { .. }
        )
    }

    pub fn is_submission(&self) -> bool {
        matches!(
            self,
            ImportError::Http { .. } | ImportError::Transport(_) | ImportError::Decode(_)
        )
    }
}

impl From<reqwest::Error> for ImportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ImportError::Decode(err.to_string())
        } else {
            ImportError::Transport(err.to_string())
        }
    }
}

/// Операции, отклонённые машиной состояний сессии импорта
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("An import is already in progress")]
    ImportInFlight,

    #[error("Nothing to import: the file has no accepted rows")]
    NothingToImport,

    #[error("Cannot {action} while the session is {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },
}

impl From<ImportError> for UseCaseError {
    fn from(err: ImportError) -> Self {
        let message = err.to_string();
        if err.is_structural() {
            UseCaseError::structural(message)
        } else if err.is_submission() {
            UseCaseError::submission(message)
        } else if matches!(err, ImportError::Session(_)) {
            UseCaseError::session(message)
        } else {
            UseCaseError::internal(message)
        }
    }
}
