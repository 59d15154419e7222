pub mod a001_policy_service;
pub mod a002_policy_category;
