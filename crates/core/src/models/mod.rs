pub mod chart;
pub mod defaults;
pub mod gradient;
pub mod health;
