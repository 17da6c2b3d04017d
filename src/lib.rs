pub mod domain;
pub mod forms;
pub mod pagination;
pub mod pricing;
pub mod repository;
pub mod services;
