pub mod coverage_status;
pub mod frequency_period;
pub mod gender;

pub use coverage_status::CoverageStatus;
pub use frequency_period::FrequencyPeriod;
pub use gender::Gender;
