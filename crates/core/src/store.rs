//! # Entity Store interface
//!
//! Persistence is split into one repository trait per entity. A [`StoreTx`]
//! is an open transaction that implements all three; it is obtained from a
//! [`ParkingStore`] and must be committed explicitly. Dropping an uncommitted
//! handle rolls its writes back.
//!
//! Every write takes the request instant `now`, which stamps `created_at` /
//! `updated_at`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use eyre::Result;

use crate::models::{
    car::Car,
    slot::{NewParkingSlot, ParkingSlot},
    ticket::{NewTicket, Ticket},
};

#[async_trait]
pub trait SlotRepository: Send {
    async fn insert_slot(&mut self, slot: &NewParkingSlot, now: DateTime<Utc>) -> Result<ParkingSlot>;

    async fn get_slot(&mut self, id: i64) -> Result<Option<ParkingSlot>>;

    async fn list_free_slots(&mut self) -> Result<Vec<ParkingSlot>>;

    async fn count_free_slots(&mut self) -> Result<i64>;

    async fn count_slots(&mut self) -> Result<i64>;

    /// Marks a free slot as occupied by `plate`.
    ///
    /// Returns `false` without touching anything when the slot does not exist
    /// or is already occupied.
    async fn occupy_slot(&mut self, id: i64, plate: &str, now: DateTime<Utc>) -> Result<bool>;

    /// Marks a slot free and clears its occupant, whatever its current state.
    async fn free_slot(&mut self, id: i64, now: DateTime<Utc>) -> Result<()>;
}

#[async_trait]
pub trait CarRepository: Send {
    /// Inserts a car unless one with the same plate exists, in which case
    /// `None` is returned and nothing is written.
    async fn insert_car(&mut self, license_plate: &str, now: DateTime<Utc>) -> Result<Option<Car>>;

    async fn get_car_by_plate(&mut self, license_plate: &str) -> Result<Option<Car>>;
}

#[async_trait]
pub trait TicketRepository: Send {
    async fn insert_ticket(&mut self, ticket: &NewTicket, now: DateTime<Utc>) -> Result<Ticket>;

    async fn get_ticket(&mut self, id: i64) -> Result<Option<Ticket>>;

    async fn close_ticket(&mut self, id: i64, exit_time: DateTime<Utc>, now: DateTime<Utc>) -> Result<()>;

    async fn mark_ticket_paid(&mut self, id: i64, now: DateTime<Utc>) -> Result<()>;

    async fn delete_ticket(&mut self, id: i64) -> Result<()>;
}

/// An open transaction against the store.
#[async_trait]
pub trait StoreTx: SlotRepository + CarRepository + TicketRepository {
    async fn commit(self: Box<Self>) -> Result<()>;
}

#[async_trait]
pub trait ParkingStore: Send + Sync {
    async fn begin(&self) -> Result<Box<dyn StoreTx>>;
}
