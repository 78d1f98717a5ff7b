//! Route handlers organized by resource

pub mod api;
pub mod doctors;
pub mod health;
pub mod home;
pub mod patients;
