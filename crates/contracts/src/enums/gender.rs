use serde::{Deserialize, Serialize};

/// Пол, для которого доступна услуга
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Gender {
    All,
    Male,
    Female,
    Other(String),
}

impl Gender {
    pub fn code(&self) -> &str {
        match self {
            Gender::All => "ALL",
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::Other(value) => value,
        }
    }

    pub fn from_code(code: &str) -> Self {
        let code = code.trim().to_uppercase();
        match code.as_str() {
            "ALL" => Gender::All,
            "MALE" => Gender::Male,
            "FEMALE" => Gender::Female,
            _ => Gender::Other(code),
        }
    }
}

impl Default for Gender {
    fn default() -> Self {
        Gender::All
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl From<String> for Gender {
    fn from(value: String) -> Self {
        Gender::from_code(&value)
    }
}

impl From<Gender> for String {
    fn from(value: Gender) -> Self {
        value.code().to_string()
    }
}
