pub mod u501_import_policy_services;
