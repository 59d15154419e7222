use super::columns;
use super::row::RawRow;
use crate::shared::error::ImportError;
use std::collections::HashMap;

/// Заголовок и строки данных файла импорта
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCsv {
    /// Нормализованные имена колонок в порядке файла
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

/// Разбивает текст файла на строки.
///
/// Заголовок берётся из первой непустой строки. Каждая строка разбирается отдельно,
/// так что незакрытая кавычка не переходит на следующую. Короткие строки
/// дополняются пустыми значениями; лишние поля в конце отбрасываются.
pub fn read_rows(text: &str) -> Result<ParsedCsv, ImportError> {
    // Убираем UTF-8 BOM, если есть
    let text = text.trim_start_matches('\u{FEFF}');

    let mut lines = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty());

    let headers: Vec<String> = match lines.next() {
        Some(line) => split_line(line)
            .iter()
            .map(|h| h.to_lowercase())
            .collect(),
        None => return Err(ImportError::EmptyFile),
    };
    check_required(&headers)?;

    let rows: Vec<RawRow> = lines
        .enumerate()
        .map(|(idx, line)| map_fields(&headers, split_line(line), idx + 1))
        .collect();

    tracing::debug!("Read {} data rows, {} columns", rows.len(), headers.len());

    Ok(ParsedCsv { headers, rows })
}

/// Разбор одной строки на поля.
///
/// Двойная кавычка переключает режим кавычек и в значение не попадает;
/// запятая разделяет поля только вне кавычек. Значения обрезаются.
fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current).trim().to_string()),
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());

    fields
}

fn check_required(headers: &[String]) -> Result<(), ImportError> {
    let missing: Vec<String> = columns::REQUIRED
        .iter()
        .filter(|required| !headers.iter().any(|h| h == *required))
        .map(|required| required.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ImportError::MissingHeaders { missing })
    }
}

fn map_fields(headers: &[String], fields: Vec<String>, number: usize) -> RawRow {
    let mut fields = fields.into_iter();
    let mut values = HashMap::with_capacity(headers.len());
    for header in headers {
        let value = fields.next().unwrap_or_default();
        if !header.is_empty() {
            values.insert(header.clone(), value);
        }
    }
    RawRow::new(number, values)
}
