use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i64,
    pub car_id: i64,
    pub parking_slot_id: i64,
    pub entry_time: DateTime<Utc>,
    pub exit_time: Option<DateTime<Utc>>,
    pub paid: bool,
}

/// Where a stored ticket sits in its lifecycle. Cancelled tickets are deleted,
/// so they have no state of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketState {
    Open,
    ClosedUnpaid,
    Paid,
}

impl Ticket {
    pub fn state(&self) -> TicketState {
        match (self.paid, self.exit_time) {
            (true, _) => TicketState::Paid,
            (false, Some(_)) => TicketState::ClosedUnpaid,
            (false, None) => TicketState::Open,
        }
    }
}

/// Row to insert when a car enters a slot.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTicket {
    pub car_id: i64,
    pub parking_slot_id: i64,
    pub entry_time: DateTime<Utc>,
    pub exit_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTicketRequest {
    pub license_plate: String,
    pub parking_slot_id: i64,
    #[serde(default)]
    pub entry_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub exit_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayTicketResponse {
    pub message: String,
    #[serde(rename = "Price")]
    pub price: String,
}
