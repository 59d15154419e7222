use std::collections::HashMap;
use std::str::FromStr;

/// Значение необязательного поля после разбора.
///
/// Отличает "колонки нет или пусто" от "есть, но непригодно", поэтому
/// подстановку значения по умолчанию всегда явно решает вызывающий код.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<T> {
    Absent,
    Invalid(String),
    Present(T),
}

impl<T> FieldValue<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            FieldValue::Present(value) => Some(value),
            _ => None,
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        self.into_option().unwrap_or(default)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, FieldValue::Invalid(_))
    }

    /// Значение вне допустимой области превращается в `Invalid`
    pub fn restrict(self, allowed: impl Fn(&T) -> bool) -> Self
    where
        T: ToString,
    {
        match self {
            FieldValue::Present(value) if !allowed(&value) => {
                FieldValue::Invalid(value.to_string())
            }
            other => other,
        }
    }
}

/// Строка данных файла импорта: нормализованная колонка → обрезанное значение
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    number: usize,
    values: HashMap<String, String>,
}

impl RawRow {
    pub fn new(number: usize, values: HashMap<String, String>) -> Self {
        Self { number, values }
    }

    /// Номер строки данных с 1
    pub fn number(&self) -> usize {
        self.number
    }

    /// Обрезанное значение; пустое, если колонки нет
    pub fn text(&self, column: &str) -> &str {
        self.values.get(column).map(|v| v.as_str()).unwrap_or("")
    }

    /// Первое непустое значение среди колонок-синонимов
    pub fn text_any(&self, columns: &[&str]) -> &str {
        columns
            .iter()
            .map(|c| self.text(c))
            .find(|v| !v.is_empty())
            .unwrap_or("")
    }

    pub fn optional_text(&self, column: &str) -> Option<String> {
        let value = self.text(column);
        (!value.is_empty()).then(|| value.to_string())
    }

    /// Конечное десятичное число
    pub fn decimal(&self, column: &str) -> FieldValue<f64> {
        match self.parse::<f64>(column) {
            FieldValue::Present(v) if !v.is_finite() => {
                FieldValue::Invalid(self.text(column).to_string())
            }
            other => other,
        }
    }

    /// Неотрицательное целое число
    pub fn integer(&self, column: &str) -> FieldValue<u32> {
        self.parse::<u32>(column)
    }

    fn parse<T: FromStr>(&self, column: &str) -> FieldValue<T> {
        let raw = self.text(column);
        if raw.is_empty() {
            return FieldValue::Absent;
        }
        match raw.parse::<T>() {
            Ok(value) => FieldValue::Present(value),
            Err(_) => FieldValue::Invalid(raw.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        RawRow::new(
            1,
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_decimal_states() {
        let r = row(&[("price", "12.5"), ("maxcoverage", "abc"), ("minage", "")]);
        assert_eq!(r.decimal("price"), FieldValue::Present(12.5));
        assert_eq!(r.decimal("maxcoverage"), FieldValue::Invalid("abc".into()));
        assert_eq!(r.decimal("minage"), FieldValue::Absent);
        assert_eq!(r.decimal("unknown"), FieldValue::Absent);
    }

    #[test]
    fn test_non_finite_decimal_is_invalid() {
        let r = row(&[("price", "inf"), ("maxcoverage", "NaN")]);
        assert!(r.decimal("price").is_invalid());
        assert!(r.decimal("maxcoverage").is_invalid());
    }

    #[test]
    fn test_integer_rejects_negative_and_fraction() {
        let r = row(&[("minage", "-3"), ("maxage", "15.5"), ("frequencylimit", "4")]);
        assert!(r.integer("minage").is_invalid());
        assert!(r.integer("maxage").is_invalid());
        assert_eq!(r.integer("frequencylimit"), FieldValue::Present(4));
    }

    #[test]
    fn test_restrict_demotes_out_of_domain() {
        assert_eq!(
            FieldValue::Present(0.0).restrict(|v| *v > 0.0),
            FieldValue::Invalid("0".into())
        );
        assert_eq!(FieldValue::Present(3.0).restrict(|v| *v > 0.0).unwrap_or(1.0), 3.0);
        assert_eq!(FieldValue::<f64>::Absent.unwrap_or(100.0), 100.0);
    }

    #[test]
    fn test_text_any_prefers_first_non_empty() {
        let r = row(&[("active", ""), ("isactive", "false")]);
        assert_eq!(r.text_any(&["active", "isactive"]), "false");
    }
}
