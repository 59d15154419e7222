use crate::enums::{CoverageStatus, FrequencyPeriod, Gender};
use serde::{Deserialize, Serialize};

// ============================================================================
// Черновик (проверенная строка CSV)
// ============================================================================

/// Проверенная типизированная строка импортируемой услуги.
///
/// Для черновика, созданного импортом, `service_name` не пуст,
/// а `standard_price` всегда > 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDraft {
    pub service_name: String,

    #[serde(default)]
    pub medical_name: String,

    #[serde(default)]
    pub description: String,

    pub standard_price: f64,

    pub coverage_percent: f64,

    #[serde(default)]
    pub coverage_status: CoverageStatus,

    pub max_coverage_amount: Option<f64>,

    pub min_age: Option<u32>,

    pub max_age: Option<u32>,

    #[serde(default)]
    pub allowed_gender: Gender,

    pub frequency_limit: Option<u32>,

    pub frequency_period: Option<FrequencyPeriod>,

    #[serde(default)]
    pub requires_referral: bool,

    pub is_active: bool,

    /// Имя категории как в файле; сопоставляется с id при отправке
    pub category_name: Option<String>,
}

impl ServiceDraft {
    pub const DEFAULT_COVERAGE_PERCENT: f64 = 100.0;

    /// Черновик со значениями по умолчанию для всех необязательных полей
    pub fn new(service_name: impl Into<String>, standard_price: f64) -> Self {
        Self {
            service_name: service_name.into(),
            medical_name: String::new(),
            description: String::new(),
            standard_price,
            coverage_percent: Self::DEFAULT_COVERAGE_PERCENT,
            coverage_status: CoverageStatus::default(),
            max_coverage_amount: None,
            min_age: None,
            max_age: None,
            allowed_gender: Gender::default(),
            frequency_limit: None,
            frequency_period: None,
            requires_referral: false,
            is_active: true,
            category_name: None,
        }
    }

    /// Добавляет полис и найденную категорию, получая тело запроса
    pub fn into_payload(self, policy_id: &str, category_id: Option<String>) -> ServicePayload {
        ServicePayload {
            policy_id: policy_id.to_string(),
            category_id,
            service_name: self.service_name,
            medical_name: self.medical_name,
            description: self.description,
            standard_price: self.standard_price,
            coverage_percent: self.coverage_percent,
            coverage_status: self.coverage_status,
            max_coverage_amount: self.max_coverage_amount,
            min_age: self.min_age,
            max_age: self.max_age,
            allowed_gender: self.allowed_gender,
            frequency_limit: self.frequency_limit,
            frequency_period: self.frequency_period,
            requires_referral: self.requires_referral,
            is_active: self.is_active,
        }
    }
}

// ============================================================================
// Payload (единица отправки в API полиса)
// ============================================================================

/// Услуга полиса в запросе пакетного создания.
///
/// Незаданные числа сериализуются как `null`, чтобы backend отличал
/// "не указано" от явного нуля.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePayload {
    pub policy_id: String,
    pub category_id: Option<String>,
    pub service_name: String,
    pub medical_name: String,
    pub description: String,
    pub standard_price: f64,
    pub coverage_percent: f64,
    pub coverage_status: CoverageStatus,
    pub max_coverage_amount: Option<f64>,
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
    pub allowed_gender: Gender,
    pub frequency_limit: Option<u32>,
    pub frequency_period: Option<FrequencyPeriod>,
    pub requires_referral: bool,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_serializes_unset_numbers_as_null() {
        let payload = ServiceDraft::new("Blood Test", 80.0).into_payload("pol-1", None);
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["policyId"], "pol-1");
        assert!(json["categoryId"].is_null());
        assert!(json["maxCoverageAmount"].is_null());
        assert!(json["minAge"].is_null());
        assert!(json["frequencyLimit"].is_null());
        assert_eq!(json["coverageStatus"], "COVERED");
        assert_eq!(json["allowedGender"], "ALL");
        assert_eq!(json["isActive"], true);
    }

    #[test]
    fn test_explicit_zero_is_kept() {
        let mut draft = ServiceDraft::new("Dental Cleaning", 60.0);
        draft.min_age = Some(0);
        let json = serde_json::to_value(draft.into_payload("pol-1", Some("cat-1".into()))).unwrap();

        assert_eq!(json["minAge"], 0);
        assert_eq!(json["categoryId"], "cat-1");
    }
}
