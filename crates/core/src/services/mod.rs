pub mod chart_service;
pub mod gradient_builder;
pub mod health_service;
