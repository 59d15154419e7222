use super::columns;
use super::row::{FieldValue, RawRow};
use contracts::domain::a001_policy_service::ServiceDraft;
use contracts::enums::{CoverageStatus, FrequencyPeriod, Gender};
use contracts::usecases::u501_import_policy_services::RowError;

/// Проверка одной строки.
///
/// Строку отклоняют только пустое имя услуги или отсутствующая/неположительная цена.
/// Непригодные необязательные значения заменяются значениями по умолчанию.
pub fn validate_row(row: &RawRow) -> Result<ServiceDraft, RowError> {
    let number = row.number();

    let service_name = row.text(columns::SERVICE_NAME);
    if service_name.is_empty() {
        return Err(RowError::missing_service_name(number));
    }

    let standard_price = match row.decimal(columns::PRICE).restrict(|p| *p > 0.0) {
        FieldValue::Present(price) => price,
        _ => return Err(RowError::invalid_price(number, row.text(columns::PRICE))),
    };

    let mut draft = ServiceDraft::new(service_name, standard_price);
    draft.medical_name = row.text(columns::MEDICAL_NAME).to_string();
    draft.description = row.text(columns::DESCRIPTION).to_string();

    draft.coverage_percent = optional(
        row,
        columns::COVERAGE_PERCENT,
        row.decimal(columns::COVERAGE_PERCENT)
            .restrict(|p| (0.0..=100.0).contains(p)),
    )
    .unwrap_or(ServiceDraft::DEFAULT_COVERAGE_PERCENT);

    draft.max_coverage_amount = optional(
        row,
        columns::MAX_COVERAGE,
        row.decimal(columns::MAX_COVERAGE).restrict(|v| *v > 0.0),
    );
    draft.min_age = optional(row, columns::MIN_AGE, row.integer(columns::MIN_AGE));
    draft.max_age = optional(row, columns::MAX_AGE, row.integer(columns::MAX_AGE));
    draft.frequency_limit = optional(
        row,
        columns::FREQUENCY_LIMIT,
        row.integer(columns::FREQUENCY_LIMIT).restrict(|v| *v > 0),
    );

    // Перечислимые поля приводятся к верхнему регистру и передаются даже неизвестными
    let status = row.text(columns::COVERAGE_STATUS);
    if !status.is_empty() {
        draft.coverage_status = CoverageStatus::from_code(status);
    }
    let gender = row.text(columns::GENDER);
    if !gender.is_empty() {
        draft.allowed_gender = Gender::from_code(gender);
    }
    let period = row.text(columns::FREQUENCY_PERIOD);
    if !period.is_empty() {
        draft.frequency_period = Some(FrequencyPeriod::from_code(period));
    }

    draft.requires_referral = row
        .text(columns::REQUIRES_REFERRAL)
        .eq_ignore_ascii_case("true");
    draft.is_active = !row
        .text_any(&[columns::ACTIVE, columns::IS_ACTIVE])
        .eq_ignore_ascii_case("false");

    draft.category_name = row.optional_text(columns::CATEGORY);

    Ok(draft)
}

/// Проверяет все строки; черновики и ошибки идут в порядке файла
pub fn validate_rows(rows: &[RawRow]) -> (Vec<ServiceDraft>, Vec<RowError>) {
    let mut accepted = Vec::with_capacity(rows.len());
    let mut errors = Vec::new();

    for row in rows {
        match validate_row(row) {
            Ok(draft) => accepted.push(draft),
            Err(e) => {
                tracing::warn!("{}", e);
                errors.push(e);
            }
        }
    }

    (accepted, errors)
}

fn optional<T>(row: &RawRow, column: &str, value: FieldValue<T>) -> Option<T> {
    if let FieldValue::Invalid(raw) = &value {
        tracing::debug!(
            "Row {}: ignoring unusable {} value '{}'",
            row.number(),
            column,
            raw
        );
    }
    value.into_option()
}

#[cfg(test)]
mod tests {
    use super::super::csv_reader::read_rows;
    use super::*;
    use contracts::usecases::u501_import_policy_services::RowErrorKind;

    fn validate(text: &str) -> (Vec<ServiceDraft>, Vec<RowError>) {
        validate_rows(&read_rows(text).unwrap().rows)
    }

    #[test]
    fn test_mixed_file_keeps_valid_rows() {
        let (accepted, errors) = validate(
            "serviceName,price,category\n\
             General Checkup,150,General\n\
             ,80,Laboratory\n\
             X-Ray,0,Radiology\n",
        );

        assert_eq!(accepted.len(), 1);
        assert_eq!(accepted[0].service_name, "General Checkup");
        assert_eq!(accepted[0].standard_price, 150.0);
        assert_eq!(accepted[0].category_name.as_deref(), Some("General"));

        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].row, 2);
        assert_eq!(errors[0].kind, RowErrorKind::MissingServiceName);
        assert_eq!(errors[1].row, 3);
        assert_eq!(errors[1].kind, RowErrorKind::InvalidPrice);
        assert_eq!(errors[1].message, "Row 3: invalid price '0'");
    }

    #[test]
    fn test_invalid_prices_produce_one_error_each() {
        let (accepted, errors) = validate(
            "serviceName,price\nA,abc\nB,-5\nC,\nD,12.75\n",
        );
        assert_eq!(accepted.len(), 1);
        assert_eq!(accepted[0].service_name, "D");
        assert_eq!(errors.iter().map(|e| e.row).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(errors.iter().all(|e| e.kind == RowErrorKind::InvalidPrice));
    }

    #[test]
    fn test_missing_name_and_price_reports_name_only() {
        let (_, errors) = validate("serviceName,price\n,\n");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Row 1: service name is required");
    }

    #[test]
    fn test_defaults_for_minimal_row() {
        let (accepted, _) = validate("serviceName,price\nBlood Test,80\n");
        let draft = &accepted[0];
        assert_eq!(draft.coverage_percent, 100.0);
        assert_eq!(draft.coverage_status, CoverageStatus::Covered);
        assert_eq!(draft.allowed_gender, Gender::All);
        assert_eq!(draft.frequency_period, None);
        assert_eq!(draft.max_coverage_amount, None);
        assert_eq!(draft.min_age, None);
        assert!(!draft.requires_referral);
        assert!(draft.is_active);
        assert_eq!(draft.medical_name, "");
        assert_eq!(draft.category_name, None);
    }

    #[test]
    fn test_unusable_optional_values_fall_back() {
        let (accepted, errors) = validate(
            "serviceName,price,coveragePercent,maxCoverage,minAge,maxAge,frequencyLimit\n\
             MRI,900,abc,-10,x,-1,0\n\
             CT,700,150,,,,\n",
        );
        assert!(errors.is_empty());
        assert_eq!(accepted[0].coverage_percent, 100.0);
        assert_eq!(accepted[0].max_coverage_amount, None);
        assert_eq!(accepted[0].min_age, None);
        assert_eq!(accepted[0].max_age, None);
        assert_eq!(accepted[0].frequency_limit, None);
        assert_eq!(accepted[1].coverage_percent, 100.0);
    }

    #[test]
    fn test_explicit_zero_coverage_is_kept() {
        let (accepted, _) = validate("serviceName,price,coveragePercent,minAge\nCosmetic,300,0,0\n");
        assert_eq!(accepted[0].coverage_percent, 0.0);
        assert_eq!(accepted[0].min_age, Some(0));
    }

    #[test]
    fn test_enum_fields_are_uppercased_and_passed_through() {
        let (accepted, _) = validate(
            "serviceName,price,coverageStatus,gender,frequencyPeriod\n\
             Mammogram,120,partial,female,yearly\n\
             Therapy,90,excluded,other,fortnightly\n",
        );
        assert_eq!(accepted[0].coverage_status, CoverageStatus::Partial);
        assert_eq!(accepted[0].allowed_gender, Gender::Female);
        assert_eq!(accepted[0].frequency_period, Some(FrequencyPeriod::Yearly));

        assert_eq!(accepted[1].coverage_status.code(), "EXCLUDED");
        assert_eq!(accepted[1].allowed_gender.code(), "OTHER");
        assert_eq!(
            accepted[1].frequency_period.as_ref().map(|p| p.code()),
            Some("FORTNIGHTLY")
        );
    }

    #[test]
    fn test_boolean_literals() {
        let (accepted, _) = validate(
            "serviceName,price,requiresReferral,active\n\
             A,10,TRUE,false\n\
             B,10,yes,\n\
             C,10,true,true\n\
             D,10,,FALSE\n",
        );
        assert!(accepted[0].requires_referral);
        assert!(!accepted[0].is_active);
        assert!(!accepted[1].requires_referral);
        assert!(accepted[1].is_active);
        assert!(accepted[2].is_active);
        assert!(!accepted[3].is_active);
    }

    #[test]
    fn test_is_active_alias() {
        let (accepted, _) = validate("serviceName,price,isActive\nA,10,false\n");
        assert!(!accepted[0].is_active);
    }
}
