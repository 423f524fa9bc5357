pub mod dashboard;
pub mod lifecycle;
pub mod ownership;
