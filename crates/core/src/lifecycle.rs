//! # Ticket lifecycle
//!
//! A ticket is created when a registered car enters a free slot and holds
//! that slot until it is paid or cancelled:
//!
//! ```text
//! Open ──(exit recorded)──> ClosedUnpaid ──(pay)──> Paid
//!   │                            │
//!   └──────────(cancel: record deleted, no fee)─────┘
//! ```
//!
//! Payment stamps the exit time if it is missing, frees the slot and bills
//! every started hour at [`pricing::HOURLY_RATE`].

use chrono::{DateTime, Utc};
use tracing::info;

use crate::{
    allocation,
    errors::{ParkingError, ParkingResult},
    models::ticket::{CreateTicketRequest, NewTicket, Ticket},
    pricing::{self, Fee},
    store::{CarRepository, SlotRepository, TicketRepository},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketReceipt {
    pub ticket_id: i64,
    pub slot_number: i32,
}

impl TicketReceipt {
    pub fn message(&self) -> String {
        format!(
            "Ticket created successfully, ticket id: {}, car parked at slot: {}",
            self.ticket_id, self.slot_number
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payment {
    pub ticket_id: i64,
    pub fee: Fee,
    /// Set when the ticket had been paid before this call; nothing was written.
    pub already_paid: bool,
}

impl Payment {
    pub fn message(&self) -> &'static str {
        if self.already_paid {
            "Ticket has already been paid"
        } else {
            "Ticket paid successfully"
        }
    }
}

fn ticket_not_found() -> ParkingError {
    ParkingError::NotFound("Ticket not found".to_string())
}

/// Parks the car registered under `request.license_plate` in
/// `request.parking_slot_id`.
///
/// The slot is checked first, so a taken slot yields `Conflict` whatever the
/// rest of the request says. An unregistered car yields `NotFound`.
pub async fn create_ticket<T>(
    tx: &mut T,
    request: &CreateTicketRequest,
    now: DateTime<Utc>,
) -> ParkingResult<TicketReceipt>
where
    T: SlotRepository + CarRepository + TicketRepository + ?Sized,
{
    let slot = tx
        .get_slot(request.parking_slot_id)
        .await?
        .filter(|slot| slot.is_free)
        .ok_or_else(allocation::slot_not_free)?;

    let car = tx
        .get_car_by_plate(&request.license_plate)
        .await?
        .ok_or_else(|| {
            ParkingError::NotFound(
                "Car not registered, please register the car first".to_string(),
            )
        })?;

    let entry_time = request.entry_time.unwrap_or(now);
    if let Some(exit_time) = request.exit_time {
        if exit_time < entry_time {
            return Err(ParkingError::Validation(
                "exit_time must not be earlier than entry_time".to_string(),
            ));
        }
    }

    allocation::allocate(tx, slot.id, &car.license_plate, now).await?;

    let ticket = tx
        .insert_ticket(
            &NewTicket {
                car_id: car.id,
                parking_slot_id: slot.id,
                entry_time,
                exit_time: request.exit_time,
            },
            now,
        )
        .await?;

    info!(
        ticket_id = ticket.id,
        slot_id = slot.id,
        license_plate = %car.license_plate,
        "Ticket created"
    );

    Ok(TicketReceipt {
        ticket_id: ticket.id,
        slot_number: slot.slot_number,
    })
}

pub async fn get_ticket<T>(tx: &mut T, ticket_id: i64) -> ParkingResult<Ticket>
where
    T: TicketRepository + ?Sized,
{
    tx.get_ticket(ticket_id).await?.ok_or_else(ticket_not_found)
}

/// Settles a ticket and frees its slot.
///
/// Paying a paid ticket changes nothing and reports the fee that was charged.
pub async fn pay_ticket<T>(tx: &mut T, ticket_id: i64, now: DateTime<Utc>) -> ParkingResult<Payment>
where
    T: SlotRepository + TicketRepository + ?Sized,
{
    let ticket = get_ticket(tx, ticket_id).await?;

    if ticket.paid {
        let exit_time = ticket.exit_time.unwrap_or(ticket.entry_time);
        return Ok(Payment {
            ticket_id,
            fee: pricing::fee(ticket.entry_time, exit_time),
            already_paid: true,
        });
    }

    let exit_time = match ticket.exit_time {
        Some(exit_time) => exit_time,
        None => {
            tx.close_ticket(ticket_id, now, now).await?;
            now
        }
    };

    allocation::release(tx, ticket.parking_slot_id, now).await?;

    let fee = pricing::fee(ticket.entry_time, exit_time);
    tx.mark_ticket_paid(ticket_id, now).await?;

    info!(
        ticket_id,
        billed_hours = fee.billed_hours,
        amount = fee.amount,
        "Ticket paid"
    );

    Ok(Payment {
        ticket_id,
        fee,
        already_paid: false,
    })
}

/// Deletes a ticket without charging anything.
///
/// An unpaid ticket still holds its slot, which is freed. A paid ticket gave
/// its slot up at payment, and the slot may have been taken by another car
/// since, so it is left alone.
pub async fn cancel_ticket<T>(tx: &mut T, ticket_id: i64, now: DateTime<Utc>) -> ParkingResult<()>
where
    T: SlotRepository + TicketRepository + ?Sized,
{
    let ticket = get_ticket(tx, ticket_id).await?;

    if !ticket.paid {
        allocation::release(tx, ticket.parking_slot_id, now).await?;
    }
    tx.delete_ticket(ticket_id).await?;

    info!(ticket_id, slot_id = ticket.parking_slot_id, "Ticket cancelled");
    Ok(())
}
