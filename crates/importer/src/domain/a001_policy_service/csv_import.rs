use super::columns;
use super::csv_reader::read_rows;
use super::validation::validate_rows;
use contracts::usecases::u501_import_policy_services::{ColumnMapping, ImportPreview};

/// Разбирает и проверяет содержимое файла, возвращая preview.
///
/// Структурная ошибка возвращается в самом preview (без принятых строк),
/// а не как ошибка, чтобы вызывающему коду всегда было что показать.
pub fn build_preview(file_name: &str, text: &str) -> ImportPreview {
    let parsed = match read_rows(text) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!("File '{}' rejected: {}", file_name, e);
            return ImportPreview::failed(file_name, e.to_string());
        }
    };

    let column_mapping = columns::ALL
        .iter()
        .map(|expected| ColumnMapping {
            expected: expected.to_string(),
            file_index: parsed.headers.iter().position(|h| h == *expected),
        })
        .collect();

    let unknown_headers: Vec<String> = parsed
        .headers
        .iter()
        .filter(|h| !h.is_empty() && !columns::is_known(h))
        .cloned()
        .collect();
    if !unknown_headers.is_empty() {
        tracing::warn!("Ignoring unknown columns: {}", unknown_headers.join(", "));
    }

    let (accepted, row_errors) = validate_rows(&parsed.rows);
    tracing::info!(
        "Parsed '{}': {} rows, {} accepted, {} rejected",
        file_name,
        parsed.rows.len(),
        accepted.len(),
        row_errors.len()
    );

    ImportPreview {
        file_name: file_name.to_string(),
        column_mapping,
        unknown_headers,
        accepted,
        row_errors,
        structural_error: None,
    }
}
