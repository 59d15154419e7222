use serde::{Deserialize, Serialize};

/// Покрывается ли услуга полисом и в каком объёме
///
/// Неизвестные значения сохраняются как есть (в верхнем регистре) в `Other`
/// и проверяются уже на стороне backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CoverageStatus {
    Covered,
    Partial,
    NotCovered,
    Other(String),
}

impl CoverageStatus {
    /// Код статуса для API
    pub fn code(&self) -> &str {
        match self {
            CoverageStatus::Covered => "COVERED",
            CoverageStatus::Partial => "PARTIAL",
            CoverageStatus::NotCovered => "NOT_COVERED",
            CoverageStatus::Other(value) => value,
        }
    }

    /// Приводит к верхнему регистру; неизвестные коды попадают в `Other`
    pub fn from_code(code: &str) -> Self {
        let code = code.trim().to_uppercase();
        match code.as_str() {
            "COVERED" => CoverageStatus::Covered,
            "PARTIAL" => CoverageStatus::Partial,
            "NOT_COVERED" => CoverageStatus::NotCovered,
            _ => CoverageStatus::Other(code),
        }
    }
}

impl Default for CoverageStatus {
    fn default() -> Self {
        CoverageStatus::Covered
    }
}

impl std::fmt::Display for CoverageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl From<String> for CoverageStatus {
    fn from(value: String) -> Self {
        CoverageStatus::from_code(&value)
    }
}

impl From<CoverageStatus> for String {
    fn from(value: CoverageStatus) -> Self {
        value.code().to_string()
    }
}
