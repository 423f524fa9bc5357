pub mod dashboard;
pub mod event;
pub mod inscription;
pub mod user;
