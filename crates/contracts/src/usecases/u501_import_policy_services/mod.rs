pub mod preview;
pub mod request;
pub mod response;

pub use preview::{ColumnMapping, ImportPreview, RowError, RowErrorKind};
pub use request::ImportRequest;
pub use response::{ImportResult, ImportStatus};

use crate::usecases::common::UseCaseMetadata;

pub struct ImportPolicyServices;

impl UseCaseMetadata for ImportPolicyServices {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "import_policy_services"
    }

    fn display_name() -> &'static str {
        "Bulk import of policy services"
    }

    fn description() -> &'static str {
        "Loads covered services of a policy from a CSV file in one batch request"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_matches_module() {
        assert_eq!(
            ImportPolicyServices::full_name(),
            "u501_import_policy_services"
        );
    }
}
