use crate::shared::config::ApiConfig;
use crate::shared::error::ImportError;
use async_trait::async_trait;
use contracts::domain::a001_policy_service::ServicePayload;
use contracts::domain::a002_policy_category::Category;

/// Операции REST API полисов, нужные импорту
#[async_trait]
pub trait PolicyApi: Send + Sync {
    /// Категории полиса; загружаются один раз перед импортом
    async fn fetch_categories(&self, policy_id: &str) -> Result<Vec<Category>, ImportError>;

    /// Создаёт все услуги одним запросом; возвращает число созданных записей
    async fn bulk_create_services(
        &self,
        policy_id: &str,
        services: &[ServicePayload],
    ) -> Result<usize, ImportError>;
}

/// HTTP-клиент API полисов.
///
/// Учётные данные берутся из переданной конфигурации;
/// глобального поиска токена нет.
pub struct PolicyApiClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl PolicyApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ImportError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config
                .token
                .clone()
                .filter(|t| !t.trim().is_empty()),
        })
    }

    fn categories_url(&self, policy_id: &str) -> String {
        format!(
            "{}/api/policies/{}/categories",
            self.base_url,
            urlencoding::encode(policy_id)
        )
    }

    fn bulk_url(&self, policy_id: &str) -> String {
        format!(
            "{}/api/policies/{}/services/bulk",
            self.base_url,
            urlencoding::encode(policy_id)
        )
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn check_status(
        url: &str,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ImportError> {
        let status = response.status();
        tracing::info!("Policy API response: {} for {}", status, url);

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ImportError::Http {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl PolicyApi for PolicyApiClient {
    async fn fetch_categories(&self, policy_id: &str) -> Result<Vec<Category>, ImportError> {
        let url = self.categories_url(policy_id);
        tracing::info!("Policy API: GET {}", url);

        let response = self
            .authorize(self.client.get(&url))
            .header("Accept", "application/json")
            .send()
            .await?;
        let response = Self::check_status(&url, response).await?;

        let categories: Vec<Category> = response
            .json()
            .await
            .map_err(|e| ImportError::Decode(format!("{}: {}", url, e)))?;

        tracing::info!("Policy API: got {} categories", categories.len());
        Ok(categories)
    }

    async fn bulk_create_services(
        &self,
        policy_id: &str,
        services: &[ServicePayload],
    ) -> Result<usize, ImportError> {
        let url = self.bulk_url(policy_id);
        tracing::info!("Policy API: POST {} ({} services)", url, services.len());

        let response = self
            .authorize(self.client.post(&url))
            .header("Accept", "application/json")
            .json(services)
            .send()
            .await?;
        let response = Self::check_status(&url, response).await?;

        let created: Vec<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| ImportError::Decode(format!("{}: {}", url, e)))?;

        Ok(created.len())
    }
}
