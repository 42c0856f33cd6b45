use crate::entities::payments;
use crate::error::AppResult;
use crate::models::{PaymentMethod, PaymentStatus};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

#[derive(Clone)]
pub struct PaymentService {
    pool: DatabaseConnection,
}

impl PaymentService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 入账即 Successful: 不核对账单金额, 不检查账单是否已结清,
    /// 也不回写账单的 payment_status (既有行为, 原样保留)
    pub async fn record(
        &self,
        bill_id: i64,
        raw_method: &str,
        amount_paid: f64,
    ) -> AppResult<payments::Model> {
        let method: PaymentMethod = raw_method.parse()?;
        let payment = payments::ActiveModel {
            bill_id: Set(bill_id),
            method: Set(method),
            amount_paid: Set(amount_paid),
            payment_time: Set(Utc::now()),
            status: Set(PaymentStatus::Successful),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;
        log::info!("payment {} recorded against bill {}", payment.id, bill_id);
        Ok(payment)
    }

    pub async fn get_all(&self) -> AppResult<Vec<payments::Model>> {
        let all = payments::Entity::find()
            .order_by_asc(payments::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(all)
    }

    /// 每张账单按至多一笔付款对待
    pub async fn by_bill_id(&self, bill_id: i64) -> AppResult<Option<payments::Model>> {
        let payment = payments::Entity::find()
            .filter(payments::Column::BillId.eq(bill_id))
            .one(&self.pool)
            .await?;
        Ok(payment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn payment(id: i64, bill_id: i64) -> payments::Model {
        payments::Model {
            id,
            bill_id,
            method: PaymentMethod::Cash,
            amount_paid: 95.0,
            payment_time: Utc::now(),
            status: PaymentStatus::Successful,
        }
    }

    #[tokio::test]
    async fn record_creates_successful_payment_and_leaves_bills_alone() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![payment(1, 12)]])
            .into_connection();
        let service = PaymentService::new(db.clone());

        let recorded = service.record(12, "Cash", 95.0).await.unwrap();
        assert_eq!(recorded.status, PaymentStatus::Successful);
        assert_eq!(recorded.method, PaymentMethod::Cash);

        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains("INSERT") && log.contains("payments"));
        // 账单表不被触碰: 付款后账单仍然是 Unpaid
        assert!(!log.contains("bills"));
        assert!(!log.contains("UPDATE"));
    }

    #[tokio::test]
    async fn record_rejects_unknown_method_before_touching_store() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let service = PaymentService::new(db.clone());

        let err = service.record(12, "Bitcoin", 95.0).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidEnumValue { field: "payment method", .. }
        ));
        assert!(db.into_transaction_log().is_empty());
    }

    #[tokio::test]
    async fn by_bill_id_absence_is_a_normal_empty_result() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<payments::Model>::new()])
            .into_connection();
        let service = PaymentService::new(db);

        assert!(service.by_bill_id(12).await.unwrap().is_none());
    }
}
