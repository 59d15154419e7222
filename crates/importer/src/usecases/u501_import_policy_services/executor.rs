use super::policy_api_client::PolicyApi;
use super::session::ImportSession;
use crate::domain::a001_policy_service::{build_preview, normalize, CategoryResolver};
use crate::shared::error::ImportError;
use crate::shared::file_io::FileSource;
use contracts::domain::a002_policy_category::Category;
use contracts::usecases::common::{UseCaseError, UseCaseMetadata, UseCaseResult};
use contracts::usecases::u501_import_policy_services::{
    ImportPolicyServices, ImportPreview, ImportRequest, ImportResult,
};
use std::sync::Arc;

/// Executor для пакетного импорта услуг полиса
pub struct ImportExecutor {
    api: Arc<dyn PolicyApi>,
    max_displayed_errors: usize,
}

impl ImportExecutor {
    pub fn new(api: Arc<dyn PolicyApi>) -> Self {
        Self {
            api,
            max_displayed_errors: 5,
        }
    }

    /// Сколько ошибок строк выводить в лог до сводного счётчика
    pub fn with_max_displayed_errors(mut self, limit: usize) -> Self {
        self.max_displayed_errors = limit;
        self
    }

    pub async fn load_categories(&self, policy_id: &str) -> Result<Vec<Category>, ImportError> {
        self.api.fetch_categories(policy_id).await
    }

    /// Выбирает файл, читает его и сохраняет результат разбора в сессии.
    ///
    /// Ошибки чтения и разбора попадают в preview как структурная ошибка;
    /// `Err` возвращается только при нарушении состояния сессии.
    pub async fn load_file(
        &self,
        session: &mut ImportSession,
        source: &dyn FileSource,
    ) -> Result<ImportPreview, ImportError> {
        session.select_file(source.name())?;

        let preview = match source.read_text().await {
            Ok(text) => build_preview(source.name(), &text),
            Err(e) => {
                tracing::warn!("{}", e);
                ImportPreview::failed(source.name(), e.to_string())
            }
        };

        if preview.has_warnings() {
            for line in preview.error_lines(self.max_displayed_errors) {
                tracing::warn!("{}", line);
            }
        }

        session.apply_preview(preview.clone())?;
        Ok(preview)
    }

    /// Нормализует принятые строки и отправляет их одним пакетным запросом.
    ///
    /// Неуспешный запрос не повторяется: он фиксируется в сессии и
    /// возвращается как результат со статусом `Failed`.
    pub async fn confirm(
        &self,
        session: &mut ImportSession,
        request: &ImportRequest,
        categories: &[Category],
    ) -> Result<ImportResult, ImportError> {
        let drafts = session.begin_import()?;

        let resolver = CategoryResolver::new(categories, request.default_category());
        let payloads = normalize(drafts, &request.policy_id, &resolver);

        tracing::info!(
            "Session {}: importing {} services into policy {}",
            session.id(),
            payloads.len(),
            request.policy_id
        );

        let outcome = self
            .api
            .bulk_create_services(&request.policy_id, &payloads)
            .await;

        match &outcome {
            Ok(count) => {
                tracing::info!("Session {}: {} services created", session.id(), count)
            }
            Err(e) => tracing::error!("Session {}: bulk import failed: {}", session.id(), e),
        }

        Ok(session.complete(&request.policy_id, outcome)?)
    }

    /// Полный сценарий: категории, файл, подтверждение.
    ///
    /// Успешная сессия остаётся в completed; вернуть её в idle
    /// должен вызывающий код через `ImportSession::poll_auto_reset`.
    pub async fn run(
        &self,
        session: &mut ImportSession,
        source: &dyn FileSource,
        request: &ImportRequest,
    ) -> UseCaseResult<ImportResult> {
        tracing::info!(
            "{} ({}): session {}, policy {}, file '{}'",
            ImportPolicyServices::display_name(),
            ImportPolicyServices::full_name(),
            session.id(),
            request.policy_id,
            source.name()
        );

        let categories = self
            .load_categories(&request.policy_id)
            .await
            .map_err(|e| {
                UseCaseError::submission("Cannot load policy categories")
                    .with_details(e.to_string())
            })?;

        let preview = self.load_file(session, source).await?;
        if let Some(error) = preview.structural_error {
            return Err(UseCaseError::structural(error));
        }

        let result = self.confirm(session, request, &categories).await?;
        if !result.is_success() {
            return Err(UseCaseError::submission(result.message));
        }

        Ok(result)
    }
}
