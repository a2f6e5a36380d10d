//! Atrium Facility Management System
//!
//! A Rust implementation of the Atrium facility-management server, providing
//! a REST JSON API for managing rooms, room assets, incident reports,
//! borrowable devices, and room-booking schedules.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod timetable;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
