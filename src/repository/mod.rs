//! Repository layer for database operations

pub mod borrow_tickets;
pub mod buildings;
pub mod devices;
pub mod incidents;
pub mod room_assets;
pub mod rooms;
pub mod schedules;
pub mod students;
pub mod users;

use sqlx::{Pool, Postgres};

/// Main repository struct holding the database connection pool.
/// Domain methods are implemented in the per-entity modules.
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}
