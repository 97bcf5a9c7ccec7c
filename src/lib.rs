//! Placemark - location reminders
//!
//! Asynchronous reminder store and the pipeline that turns platform
//! region-transition events into reminder notifications.

pub mod config;
pub mod geofence;
pub mod handlers;
pub mod interfaces;
pub mod model;
pub mod notification;
pub mod repository;
pub mod services;
pub mod storage;
pub mod utils;
pub mod validation;
pub mod worker;
