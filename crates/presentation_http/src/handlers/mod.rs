//! HTTP request handlers

pub mod health;
pub mod sms;
pub mod system;
