use contracts::domain::a001_policy_service::{ServiceDraft, ServicePayload};
use contracts::domain::a002_policy_category::Category;
use std::collections::HashMap;

/// Сопоставляет имена категорий с id без учёта регистра, с id по умолчанию
#[derive(Debug, Clone)]
pub struct CategoryResolver {
    by_name: HashMap<String, String>,
    default_id: Option<String>,
}

impl CategoryResolver {
    pub fn new(categories: &[Category], default_category_id: Option<&str>) -> Self {
        let mut by_name = HashMap::with_capacity(categories.len());
        for category in categories {
            // При дублях имён побеждает первая категория
            by_name
                .entry(category.name.trim().to_lowercase())
                .or_insert_with(|| category.id.clone());
        }

        let default_id = default_category_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string);

        Self {
            by_name,
            default_id,
        }
    }

    /// Найденный id, иначе id по умолчанию, иначе ничего
    pub fn resolve(&self, name: Option<&str>) -> Option<String> {
        let matched = name
            .map(|n| n.trim().to_lowercase())
            .and_then(|n| self.by_name.get(&n).cloned());

        if matched.is_none() {
            if let Some(name) = name {
                tracing::debug!("Unknown category '{}', using default", name);
            }
        }

        matched.or_else(|| self.default_id.clone())
    }
}

/// Превращает принятые черновики в тела одного пакетного запроса, с сохранением порядка
pub fn normalize(
    drafts: Vec<ServiceDraft>,
    policy_id: &str,
    resolver: &CategoryResolver,
) -> Vec<ServicePayload> {
    drafts
        .into_iter()
        .map(|draft| {
            let category_id = resolver.resolve(draft.category_name.as_deref());
            draft.into_payload(policy_id, category_id)
        })
        .collect()
}
