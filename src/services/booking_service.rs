use crate::entities::table_bookings;
use crate::error::{AppError, AppResult};
use crate::models::BookingStatus;
use chrono::{NaiveDate, NaiveTime, Utc};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryOrder, Set,
};

#[derive(Clone)]
pub struct BookingService {
    pool: DatabaseConnection,
}

impl BookingService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 预订不检查同桌同时段冲突, 也不改动桌台状态
    pub async fn create(
        &self,
        customer_id: i64,
        table_id: i64,
        booking_date: NaiveDate,
        booking_time: NaiveTime,
    ) -> AppResult<table_bookings::Model> {
        let booking = table_bookings::ActiveModel {
            customer_id: Set(customer_id),
            table_id: Set(table_id),
            booking_date: Set(booking_date),
            booking_time: Set(booking_time),
            status: Set(BookingStatus::Confirmed),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;
        Ok(booking)
    }

    pub async fn get_all(&self) -> AppResult<Vec<table_bookings::Model>> {
        let all = table_bookings::Entity::find()
            .order_by_asc(table_bookings::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(all)
    }

    pub async fn update_status(
        &self,
        booking_id: i64,
        raw_status: &str,
    ) -> AppResult<table_bookings::Model> {
        let status: BookingStatus = raw_status.parse()?;
        let mut model = table_bookings::Entity::find_by_id(booking_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {booking_id}")))?
            .into_active_model();
        model.status = Set(status);
        Ok(model.update(&self.pool).await?)
    }

    pub async fn delete(&self, booking_id: i64) -> AppResult<()> {
        table_bookings::Entity::delete_by_id(booking_id)
            .exec(&self.pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn booking(id: i64, status: BookingStatus) -> table_bookings::Model {
        table_bookings::Model {
            id,
            customer_id: 5,
            table_id: 3,
            booking_date: NaiveDate::from_ymd_opt(2025, 9, 20).unwrap(),
            booking_time: NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
            status,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn create_starts_confirmed() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![booking(1, BookingStatus::Confirmed)]])
            .into_connection();
        let service = BookingService::new(db.clone());

        let created = service
            .create(
                5,
                3,
                NaiveDate::from_ymd_opt(2025, 9, 20).unwrap(),
                NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(created.status, BookingStatus::Confirmed);

        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains("INSERT") && log.contains("table_bookings"));
        // 预订流程从不触碰桌台状态
        assert!(!log.contains("UPDATE"));
    }

    #[tokio::test]
    async fn update_status_rejects_unknown_status_before_touching_store() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let service = BookingService::new(db.clone());

        let err = service.update_status(1, "Pending").await.unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidEnumValue { field: "booking status", .. }
        ));
        assert!(db.into_transaction_log().is_empty());
    }

    #[tokio::test]
    async fn update_status_accepts_cancellation() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![booking(1, BookingStatus::Confirmed)]])
            .append_query_results([vec![booking(1, BookingStatus::Cancelled)]])
            .into_connection();
        let service = BookingService::new(db);

        let updated = service.update_status(1, "Cancelled").await.unwrap();
        assert_eq!(updated.status, BookingStatus::Cancelled);
    }
}
