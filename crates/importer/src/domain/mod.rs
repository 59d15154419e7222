pub mod a001_policy_service;
