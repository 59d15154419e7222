use crate::shared::error::ImportError;
use crate::shared::file_io::FileSink;

pub const TEMPLATE_FILE_NAME: &str = "policy_services_template.csv";

const TEMPLATE_HEADER: [&str; 15] = [
    "serviceName",
    "medicalName",
    "description",
    "price",
    "coveragePercent",
    "coverageStatus",
    "maxCoverage",
    "minAge",
    "maxAge",
    "gender",
    "frequencyLimit",
    "frequencyPeriod",
    "requiresReferral",
    "active",
    "category",
];

const TEMPLATE_ROWS: [[&str; 15]; 3] = [
    [
        "General Checkup", "General Medical Examination", "Routine annual health checkup",
        "150", "100", "COVERED", "", "", "", "ALL", "1", "YEARLY", "false", "true", "General",
    ],
    [
        "Blood Test", "Complete Blood Count", "CBC laboratory panel",
        "80", "80", "PARTIAL", "200", "", "", "ALL", "4", "YEARLY", "false", "true", "Laboratory",
    ],
    [
        "X-Ray, Chest", "Chest Radiograph", "Two-view chest imaging",
        "250", "70", "PARTIAL", "500", "18", "", "ALL", "2", "MONTHLY", "true", "true", "Radiology",
    ],
];

/// Шаблон CSV со всеми колонками и тремя строками-примерами
pub fn template_csv() -> Result<String, ImportError> {
    let to_error = |reason: String| ImportError::FileWrite {
        name: TEMPLATE_FILE_NAME.to_string(),
        reason,
    };

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record(TEMPLATE_HEADER)
        .map_err(|e| to_error(e.to_string()))?;
    for row in TEMPLATE_ROWS {
        writer.write_record(row).map_err(|e| to_error(e.to_string()))?;
    }

    let bytes = writer.into_inner().map_err(|e| to_error(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| to_error(e.to_string()))
}

pub async fn write_template(sink: &dyn FileSink) -> Result<(), ImportError> {
    let content = template_csv()?;
    sink.write(TEMPLATE_FILE_NAME, content.as_bytes()).await
}
