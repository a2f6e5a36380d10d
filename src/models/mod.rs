//! Domain models exchanged with the REST API

pub mod borrow_ticket;
pub mod building;
pub mod device;
pub mod enums;
pub mod incident;
pub mod room;
pub mod room_asset;
pub mod schedule;
pub mod student;
pub mod user;
