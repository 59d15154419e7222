//! Общие типы импорта услуг полиса и его вызывающих сторон

pub mod domain;
pub mod enums;
pub mod usecases;
