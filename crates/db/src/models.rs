use chrono::{DateTime, Utc};
use parking_core::models::{car::Car, slot::ParkingSlot, ticket::Ticket};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbParkingSlot {
    pub id: i64,
    pub slot_number: i32,
    pub is_free: bool,
    pub license_plate: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbCar {
    pub id: i64,
    pub license_plate: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTicket {
    pub id: i64,
    pub car_id: i64,
    pub parking_slot_id: i64,
    pub entry_time: DateTime<Utc>,
    pub exit_time: Option<DateTime<Utc>>,
    pub paid: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<DbParkingSlot> for ParkingSlot {
    fn from(row: DbParkingSlot) -> Self {
        ParkingSlot {
            id: row.id,
            slot_number: row.slot_number,
            is_free: row.is_free,
            occupant_plate: row.license_plate,
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        }
    }
}

impl From<DbCar> for Car {
    fn from(row: DbCar) -> Self {
        Car {
            id: row.id,
            license_plate: row.license_plate,
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        }
    }
}

impl From<DbTicket> for Ticket {
    fn from(row: DbTicket) -> Self {
        Ticket {
            id: row.id,
            car_id: row.car_id,
            parking_slot_id: row.parking_slot_id,
            entry_time: row.entry_time,
            exit_time: row.exit_time,
            paid: row.paid,
        }
    }
}
