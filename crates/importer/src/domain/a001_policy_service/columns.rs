//! Нормализованные (в нижнем регистре) имена колонок файла импорта услуг

pub const SERVICE_NAME: &str = "servicename";
pub const MEDICAL_NAME: &str = "medicalname";
pub const DESCRIPTION: &str = "description";
pub const PRICE: &str = "price";
pub const COVERAGE_PERCENT: &str = "coveragepercent";
pub const COVERAGE_STATUS: &str = "coveragestatus";
pub const MAX_COVERAGE: &str = "maxcoverage";
pub const MIN_AGE: &str = "minage";
pub const MAX_AGE: &str = "maxage";
pub const GENDER: &str = "gender";
pub const FREQUENCY_LIMIT: &str = "frequencylimit";
pub const FREQUENCY_PERIOD: &str = "frequencyperiod";
pub const REQUIRES_REFERRAL: &str = "requiresreferral";
pub const ACTIVE: &str = "active";
pub const IS_ACTIVE: &str = "isactive";
pub const CATEGORY: &str = "category";

/// Колонки, без которых файл отклоняется
pub const REQUIRED: [&str; 2] = [SERVICE_NAME, PRICE];

/// Полный набор колонок в порядке шаблона
pub const ALL: [&str; 15] = [
    SERVICE_NAME,
    MEDICAL_NAME,
    DESCRIPTION,
    PRICE,
    COVERAGE_PERCENT,
    COVERAGE_STATUS,
    MAX_COVERAGE,
    MIN_AGE,
    MAX_AGE,
    GENDER,
    FREQUENCY_LIMIT,
    FREQUENCY_PERIOD,
    REQUIRES_REFERRAL,
    ACTIVE,
    CATEGORY,
];

/// Известна ли импорту нормализованная колонка
pub fn is_known(header: &str) -> bool {
    header == IS_ACTIVE || ALL.contains(&header)
}
