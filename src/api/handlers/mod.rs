pub mod auth;
pub mod dashboard;
pub mod event;
pub mod health;
pub mod inscription;
pub mod user;
