use crate::shared::error::{ImportError, SessionError};
use chrono::{DateTime, Utc};
use contracts::domain::a001_policy_service::ServiceDraft;
use contracts::usecases::u501_import_policy_services::{ImportPreview, ImportResult, ImportStatus};
use std::time::Duration;
use uuid::Uuid;

/// Состояние одного диалога импорта
#[derive(Debug, Clone)]
pub enum SessionState {
    Idle,
    FileSelected {
        file_name: String,
    },
    /// Разбор завершён; preview может содержать ошибки строк или структурную ошибку
    Parsed {
        preview: ImportPreview,
    },
    Importing {
        file_name: String,
        row_count: usize,
        started_at: DateTime<Utc>,
    },
    Completed {
        result: ImportResult,
    },
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::FileSelected { .. } => "file_selected",
            SessionState::Parsed { .. } => "parsed",
            SessionState::Importing { .. } => "importing",
            SessionState::Completed { .. } => "completed",
        }
    }
}

/// Машина состояний сессии импорта.
///
/// `Idle → FileSelected → Parsed → Importing → Completed`. Во время импорта
/// допустимо только завершение, поэтому у сессии не бывает
/// больше одного пакетного запроса одновременно.
#[derive(Debug)]
pub struct ImportSession {
    id: String,
    state: SessionState,
    reset_delay: Duration,
}

impl ImportSession {
    /// `reset_delay`: сколько показывается успешный результат до возврата в idle
    pub fn new(reset_delay: Duration) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            state: SessionState::Idle,
            reset_delay,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_importing(&self) -> bool {
        matches!(self.state, SessionState::Importing { .. })
    }

    pub fn preview(&self) -> Option<&ImportPreview> {
        match &self.state {
            SessionState::Parsed { preview } => Some(preview),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&ImportResult> {
        match &self.state {
            SessionState::Completed { result } => Some(result),
            _ => None,
        }
    }

    /// Выбор файла (пере)запускает сценарий из любого состояния, кроме `Importing`
    pub fn select_file(&mut self, file_name: impl Into<String>) -> Result<(), SessionError> {
        self.ensure_not_importing()?;
        let file_name = file_name.into();
        tracing::debug!("Session {}: file selected '{}'", self.id, file_name);
        self.state = SessionState::FileSelected { file_name };
        Ok(())
    }

    /// Сохраняет результат разбора; предупреждения не блокируют переход
    pub fn apply_preview(&mut self, preview: ImportPreview) -> Result<(), SessionError> {
        match &self.state {
            SessionState::FileSelected { .. } => {
                self.state = SessionState::Parsed { preview };
                Ok(())
            }
            other => Err(SessionError::InvalidTransition {
                action: "apply a parse result",
                state: other.name(),
            }),
        }
    }

    /// Подтверждает импорт и отдаёт принятые черновики
    pub fn begin_import(&mut self) -> Result<Vec<ServiceDraft>, SessionError> {
        match std::mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::Parsed { preview } if preview.can_import() => {
                self.state = SessionState::Importing {
                    file_name: preview.file_name,
                    row_count: preview.accepted.len(),
                    started_at: Utc::now(),
                };
                Ok(preview.accepted)
            }
            other => {
                let err = match &other {
                    SessionState::Parsed { .. } => SessionError::NothingToImport,
                    SessionState::Importing { .. } => SessionError::ImportInFlight,
                    state => SessionError::InvalidTransition {
                        action: "start an import",
                        state: state.name(),
                    },
                };
                self.state = other;
                Err(err)
            }
        }
    }

    /// Фиксирует итог пакетного запроса
    pub fn complete(
        &mut self,
        policy_id: &str,
        outcome: Result<usize, ImportError>,
    ) -> Result<ImportResult, SessionError> {
        let started_at = match &self.state {
            SessionState::Importing { started_at, .. } => *started_at,
            other => {
                return Err(SessionError::InvalidTransition {
                    action: "complete an import",
                    state: other.name(),
                })
            }
        };

        let (status, created_count, message) = match outcome {
            Ok(count) => (
                ImportStatus::Completed,
                count,
                format!("Imported {} services", count),
            ),
            Err(e) => (ImportStatus::Failed, 0, format!("Import failed: {}", e)),
        };

        let result = ImportResult {
            session_id: self.id.clone(),
            policy_id: policy_id.to_string(),
            status,
            created_count,
            message,
            started_at,
            completed_at: Utc::now(),
        };
        self.state = SessionState::Completed {
            result: result.clone(),
        };
        Ok(result)
    }

    /// Возвращает успешную сессию в idle после задержки показа.
    /// Неуспешная сессия остаётся до сброса или выбора нового файла.
    pub fn poll_auto_reset(&mut self, now: DateTime<Utc>) -> bool {
        let due = match &self.state {
            SessionState::Completed { result } if result.is_success() => {
                let elapsed = now.signed_duration_since(result.completed_at);
                elapsed.to_std().map_or(false, |e| e >= self.reset_delay)
            }
            _ => false,
        };

        if due {
            self.state = SessionState::Idle;
        }
        due
    }

    /// Сбрасывает выбранный файл и результат разбора
    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.ensure_not_importing()?;
        self.state = SessionState::Idle;
        Ok(())
    }

    fn ensure_not_importing(&self) -> Result<(), SessionError> {
        if self.is_importing() {
            Err(SessionError::ImportInFlight)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::u501_import_policy_services::RowError;

    fn preview(accepted: usize) -> ImportPreview {
        ImportPreview {
            file_name: "services.csv".into(),
            accepted: (0..accepted)
                .map(|i| ServiceDraft::new(format!("Service {}", i), 10.0))
                .collect(),
            row_errors: vec![RowError::missing_service_name(3)],
            ..Default::default()
        }
    }

    fn parsed_session(accepted: usize) -> ImportSession {
        let mut session = ImportSession::new(Duration::from_millis(2000));
        session.select_file("services.csv").unwrap();
        session.apply_preview(preview(accepted)).unwrap();
        session
    }

    #[test]
    fn test_happy_path() {
        let mut session = parsed_session(2);
        assert_eq!(session.state().name(), "parsed");
        assert_eq!(session.preview().unwrap().row_errors.len(), 1);

        let drafts = session.begin_import().unwrap();
        assert_eq!(drafts.len(), 2);
        assert!(session.is_importing());

        let result = session.complete("pol-1", Ok(2)).unwrap();
        assert!(result.is_success());
        assert_eq!(result.created_count, 2);
        assert_eq!(result.message, "Imported 2 services");
        assert_eq!(result.session_id, session.id());
    }

    #[test]
    fn test_confirm_requires_accepted_rows() {
        let mut session = parsed_session(0);
        assert_eq!(session.begin_import(), Err(SessionError::NothingToImport));
        assert_eq!(session.state().name(), "parsed");

        let mut failed = ImportSession::new(Duration::ZERO);
        failed.select_file("bad.csv").unwrap();
        failed
            .apply_preview(ImportPreview::failed("bad.csv", "Missing required columns: price"))
            .unwrap();
        assert_eq!(failed.begin_import(), Err(SessionError::NothingToImport));
    }

    #[test]
    fn test_no_reentry_while_importing() {
        let mut session = parsed_session(1);
        session.begin_import().unwrap();

        assert_eq!(session.begin_import(), Err(SessionError::ImportInFlight));
        assert_eq!(session.clear(), Err(SessionError::ImportInFlight));
        assert_eq!(
            session.select_file("other.csv"),
            Err(SessionError::ImportInFlight)
        );
        assert!(session.is_importing());
    }

    #[test]
    fn test_out_of_order_transitions_are_refused() {
        let mut session = ImportSession::new(Duration::ZERO);
        assert!(matches!(
            session.begin_import(),
            Err(SessionError::InvalidTransition { state: "idle", .. })
        ));
        assert!(session.apply_preview(preview(1)).is_err());
        assert!(session.complete("pol-1", Ok(1)).is_err());
    }

    #[test]
    fn test_success_resets_after_delay() {
        let mut session = parsed_session(1);
        session.begin_import().unwrap();
        let completed_at = session.complete("pol-1", Ok(1)).unwrap().completed_at;

        assert!(!session.poll_auto_reset(completed_at + chrono::Duration::milliseconds(500)));
        assert_eq!(session.state().name(), "completed");

        assert!(session.poll_auto_reset(completed_at + chrono::Duration::milliseconds(2000)));
        assert_eq!(session.state().name(), "idle");
    }

    #[test]
    fn test_failure_stays_until_cleared_or_reselected() {
        let mut session = parsed_session(1);
        session.begin_import().unwrap();
        let result = session
            .complete(
                "pol-1",
                Err(ImportError::Http {
                    status: 502,
                    body: "bad gateway".into(),
                }),
            )
            .unwrap();
        assert!(!result.is_success());
        assert_eq!(result.created_count, 0);
        assert!(result.message.contains("HTTP 502"));
        let completed_at = result.completed_at;

        assert!(!session.poll_auto_reset(completed_at + chrono::Duration::hours(1)));
        assert_eq!(session.state().name(), "completed");

        session.select_file("fixed.csv").unwrap();
        assert_eq!(session.state().name(), "file_selected");
        session.clear().unwrap();
        assert_eq!(session.state().name(), "idle");
    }

    #[test]
    fn test_clear_discards_parsed_data() {
        let mut session = parsed_session(3);
        session.clear().unwrap();
        assert!(session.preview().is_none());
        assert!(matches!(session.state(), SessionState::Idle));
    }
}
