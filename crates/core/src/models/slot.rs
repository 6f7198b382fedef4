use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkingSlot {
    pub id: i64,
    pub slot_number: i32,
    pub is_free: bool,
    /// Plate of the car currently parked here; `None` exactly when the slot is free.
    #[serde(rename = "license_plate")]
    pub occupant_plate: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// One entry of the `POST /parking-slots/create` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewParkingSlot {
    pub slot_number: i32,
    #[serde(default = "default_is_free")]
    pub is_free: bool,
    #[serde(default)]
    pub license_plate: Option<String>,
}

impl NewParkingSlot {
    pub fn free(slot_number: i32) -> Self {
        Self {
            slot_number,
            is_free: true,
            license_plate: None,
        }
    }
}

fn default_is_free() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSlotsResponse {
    pub slots_created: usize,
}
