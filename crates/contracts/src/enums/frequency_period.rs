use serde::{Deserialize, Serialize};

/// Период, к которому относится лимит частоты
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FrequencyPeriod {
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Other(String),
}

impl FrequencyPeriod {
    pub fn code(&self) -> &str {
        match self {
            FrequencyPeriod::Daily => "DAILY",
            FrequencyPeriod::Weekly => "WEEKLY",
            FrequencyPeriod::Monthly => "MONTHLY",
            FrequencyPeriod::Yearly => "YEARLY",
            FrequencyPeriod::Other(value) => value,
        }
    }

    pub fn from_code(code: &str) -> Self {
        let code = code.trim().to_uppercase();
        match code.as_str() {
            "DAILY" => FrequencyPeriod::Daily,
            "WEEKLY" => FrequencyPeriod::Weekly,
            "MONTHLY" => FrequencyPeriod::Monthly,
            "YEARLY" => FrequencyPeriod::Yearly,
            _ => FrequencyPeriod::Other(code),
        }
    }
}

impl std::fmt::Display for FrequencyPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl From<String> for FrequencyPeriod {
    fn from(value: String) -> Self {
        FrequencyPeriod::from_code(&value)
    }
}

impl From<FrequencyPeriod> for String {
    fn from(value: FrequencyPeriod) -> Self {
        value.code().to_string()
    }
}
