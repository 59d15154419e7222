/// Идентификация UseCase в логах и отчётах
pub trait UseCaseMetadata {
    /// Индекс, например "u501"
    fn usecase_index() -> &'static str;

    /// Техническое имя, например "import_policy_services"
    fn usecase_name() -> &'static str;

    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// "<index>_<name>", совпадает с именем модуля UseCase
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
