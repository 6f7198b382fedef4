//! Transactional store implementations.
//!
//! Both backends run the statements in [`queries`]; `sql_store!` stamps out
//! the store and transaction types for one `sqlx` database driver.

pub mod queries;

macro_rules! sql_store {
    ($store:ident, $tx:ident, $db:ty) => {
        #[derive(Debug, Clone)]
        pub struct $store {
            pool: sqlx::Pool<$db>,
        }

        impl $store {
            pub fn new(pool: sqlx::Pool<$db>) -> Self {
                Self { pool }
            }
        }

        #[async_trait::async_trait]
        impl parking_core::store::ParkingStore for $store {
            async fn begin(&self) -> eyre::Result<Box<dyn parking_core::store::StoreTx>> {
                let inner = self.pool.begin().await?;
                Ok(Box::new($tx { inner }))
            }
        }

        /// Open transaction. Rolled back on drop unless committed.
        pub struct $tx {
            inner: sqlx::Transaction<'static, $db>,
        }

        #[async_trait::async_trait]
        impl parking_core::store::SlotRepository for $tx {
            async fn insert_slot(
                &mut self,
                slot: &parking_core::models::slot::NewParkingSlot,
                now: chrono::DateTime<chrono::Utc>,
            ) -> eyre::Result<parking_core::models::slot::ParkingSlot> {
                let row = sqlx::query_as::<_, $crate::models::DbParkingSlot>(
                    $crate::repositories::queries::INSERT_SLOT,
                )
                .bind(slot.slot_number)
                .bind(slot.is_free)
                .bind(slot.license_plate.as_deref())
                .bind(now)
                .bind(now)
                .fetch_one(&mut *self.inner)
                .await?;

                tracing::debug!("Inserted parking slot: id={}, number={}", row.id, row.slot_number);
                Ok(row.into())
            }

            async fn get_slot(
                &mut self,
                id: i64,
            ) -> eyre::Result<Option<parking_core::models::slot::ParkingSlot>> {
                let row = sqlx::query_as::<_, $crate::models::DbParkingSlot>(
                    $crate::repositories::queries::SELECT_SLOT_BY_ID,
                )
                .bind(id)
                .fetch_optional(&mut *self.inner)
                .await?;

                Ok(row.map(Into::into))
            }

            async fn list_free_slots(
                &mut self,
            ) -> eyre::Result<Vec<parking_core::models::slot::ParkingSlot>> {
                let rows = sqlx::query_as::<_, $crate::models::DbParkingSlot>(
                    $crate::repositories::queries::SELECT_FREE_SLOTS,
                )
                .fetch_all(&mut *self.inner)
                .await?;

                Ok(rows.into_iter().map(Into::into).collect())
            }

            async fn count_free_slots(&mut self) -> eyre::Result<i64> {
                let count = sqlx::query_scalar::<_, i64>(
                    $crate::repositories::queries::COUNT_FREE_SLOTS,
                )
                .fetch_one(&mut *self.inner)
                .await?;

                Ok(count)
            }

            async fn count_slots(&mut self) -> eyre::Result<i64> {
                let count = sqlx::query_scalar::<_, i64>($crate::repositories::queries::COUNT_SLOTS)
                    .fetch_one(&mut *self.inner)
                    .await?;

                Ok(count)
            }

            async fn occupy_slot(
                &mut self,
                id: i64,
                plate: &str,
                now: chrono::DateTime<chrono::Utc>,
            ) -> eyre::Result<bool> {
                let result = sqlx::query($crate::repositories::queries::OCCUPY_SLOT)
                    .bind(id)
                    .bind(plate)
                    .bind(now)
                    .execute(&mut *self.inner)
                    .await?;

                Ok(result.rows_affected() == 1)
            }

            async fn free_slot(
                &mut self,
                id: i64,
                now: chrono::DateTime<chrono::Utc>,
            ) -> eyre::Result<()> {
                sqlx::query($crate::repositories::queries::FREE_SLOT)
                    .bind(id)
                    .bind(now)
                    .execute(&mut *self.inner)
                    .await?;

                Ok(())
            }
        }

        #[async_trait::async_trait]
        impl parking_core::store::CarRepository for $tx {
            async fn insert_car(
                &mut self,
                license_plate: &str,
                now: chrono::DateTime<chrono::Utc>,
            ) -> eyre::Result<Option<parking_core::models::car::Car>> {
                let row = sqlx::query_as::<_, $crate::models::DbCar>(
                    $crate::repositories::queries::INSERT_CAR,
                )
                .bind(license_plate)
                .bind(now)
                .bind(now)
                .fetch_optional(&mut *self.inner)
                .await?;

                Ok(row.map(Into::into))
            }

            async fn get_car_by_plate(
                &mut self,
                license_plate: &str,
            ) -> eyre::Result<Option<parking_core::models::car::Car>> {
                let row = sqlx::query_as::<_, $crate::models::DbCar>(
                    $crate::repositories::queries::SELECT_CAR_BY_PLATE,
                )
                .bind(license_plate)
                .fetch_optional(&mut *self.inner)
                .await?;

                Ok(row.map(Into::into))
            }
        }

        #[async_trait::async_trait]
        impl parking_core::store::TicketRepository for $tx {
            async fn insert_ticket(
                &mut self,
                ticket: &parking_core::models::ticket::NewTicket,
                now: chrono::DateTime<chrono::Utc>,
            ) -> eyre::Result<parking_core::models::ticket::Ticket> {
                let row = sqlx::query_as::<_, $crate::models::DbTicket>(
                    $crate::repositories::queries::INSERT_TICKET,
                )
                .bind(ticket.car_id)
                .bind(ticket.parking_slot_id)
                .bind(ticket.entry_time)
                .bind(ticket.exit_time)
                .bind(now)
                .bind(now)
                .fetch_one(&mut *self.inner)
                .await?;

                tracing::debug!("Inserted ticket: id={}, slot_id={}", row.id, row.parking_slot_id);
                Ok(row.into())
            }

            async fn get_ticket(
                &mut self,
                id: i64,
            ) -> eyre::Result<Option<parking_core::models::ticket::Ticket>> {
                let row = sqlx::query_as::<_, $crate::models::DbTicket>(
                    $crate::repositories::queries::SELECT_TICKET_BY_ID,
                )
                .bind(id)
                .fetch_optional(&mut *self.inner)
                .await?;

                Ok(row.map(Into::into))
            }

            async fn close_ticket(
                &mut self,
                id: i64,
                exit_time: chrono::DateTime<chrono::Utc>,
                now: chrono::DateTime<chrono::Utc>,
            ) -> eyre::Result<()> {
                sqlx::query($crate::repositories::queries::CLOSE_TICKET)
                    .bind(id)
                    .bind(exit_time)
                    .bind(now)
                    .execute(&mut *self.inner)
                    .await?;

                Ok(())
            }

            async fn mark_ticket_paid(
                &mut self,
                id: i64,
                now: chrono::DateTime<chrono::Utc>,
            ) -> eyre::Result<()> {
                sqlx::query($crate::repositories::queries::MARK_TICKET_PAID)
                    .bind(id)
                    .bind(now)
                    .execute(&mut *self.inner)
                    .await?;

                Ok(())
            }

            async fn delete_ticket(&mut self, id: i64) -> eyre::Result<()> {
                sqlx::query($crate::repositories::queries::DELETE_TICKET)
                    .bind(id)
                    .execute(&mut *self.inner)
                    .await?;

                Ok(())
            }
        }

        #[async_trait::async_trait]
        impl parking_core::store::StoreTx for $tx {
            async fn commit(self: Box<Self>) -> eyre::Result<()> {
                let this = *self;
                this.inner.commit().await?;
                Ok(())
            }
        }
    };
}

pub mod postgres;
pub mod sqlite;
