use crate::entities::{orders, tables};
use crate::error::{AppError, AppResult};
use crate::models::OrderStatus;
use crate::services::TableService;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, IntoActiveModel,
    QueryOrder, Set, TransactionTrait,
};

#[derive(Clone)]
pub struct OrderService {
    pool: DatabaseConnection,
    tables: TableService,
}

impl OrderService {
    pub fn new(pool: DatabaseConnection, tables: TableService) -> Self {
        Self { pool, tables }
    }

    /// 开单: 占桌与订单写入在同一个事务里, 要么都生效要么都不生效
    pub async fn create(&self, table_id: i64, waiter_id: i64) -> AppResult<orders::Model> {
        let txn = self.pool.begin().await?;
        match Self::reserve_and_insert(&self.tables, &txn, table_id, waiter_id).await {
            Ok(order) => {
                txn.commit().await?;
                log::info!("order {} opened on table {}", order.id, table_id);
                Ok(order)
            }
            Err(err) => {
                txn.rollback().await?;
                Err(err)
            }
        }
    }

    async fn reserve_and_insert(
        tables: &TableService,
        txn: &DatabaseTransaction,
        table_id: i64,
        waiter_id: i64,
    ) -> AppResult<orders::Model> {
        let table = tables.reserve_for_order(txn, table_id).await?;
        let order = orders::ActiveModel {
            table_id: Set(table.id),
            waiter_id: Set(waiter_id),
            order_time: Set(Utc::now()),
            status: Set(OrderStatus::Placed),
            ..Default::default()
        }
        .insert(txn)
        .await?;
        Ok(order)
    }

    pub async fn get_all(&self) -> AppResult<Vec<orders::Model>> {
        let all = orders::Entity::find()
            .order_by_asc(orders::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(all)
    }

    pub async fn get_by_id(&self, order_id: i64) -> AppResult<Option<orders::Model>> {
        Ok(orders::Entity::find_by_id(order_id).one(&self.pool).await?)
    }

    /// 先解析再查库: 非法状态字符串不会触碰任何订单行
    pub async fn update_status(&self, order_id: i64, raw_status: &str) -> AppResult<orders::Model> {
        let status: OrderStatus = raw_status.parse()?;
        let mut model = orders::Entity::find_by_id(order_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order {order_id}")))?
            .into_active_model();
        model.status = Set(status);
        Ok(model.update(&self.pool).await?)
    }

    /// 删除订单不释放桌台
    pub async fn delete(&self, order_id: i64) -> AppResult<()> {
        orders::Entity::delete_by_id(order_id)
            .exec(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn available_tables(&self) -> AppResult<Vec<tables::Model>> {
        self.tables.available().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TableStatus;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn table(id: i64, status: TableStatus) -> tables::Model {
        tables::Model {
            id,
            number: id as i32,
            capacity: 4,
            status,
        }
    }

    fn order(id: i64, table_id: i64, status: OrderStatus) -> orders::Model {
        orders::Model {
            id,
            table_id,
            waiter_id: 9,
            order_time: Utc::now(),
            status,
        }
    }

    fn service(db: &DatabaseConnection) -> OrderService {
        OrderService::new(db.clone(), TableService::new(db.clone()))
    }

    #[tokio::test]
    async fn create_on_available_table_occupies_it_and_places_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![table(3, TableStatus::Available)]])
            .append_query_results([vec![table(3, TableStatus::Occupied)]])
            .append_query_results([vec![order(1, 3, OrderStatus::Placed)]])
            .into_connection();

        let created = service(&db).create(3, 9).await.unwrap();
        assert_eq!(created.status, OrderStatus::Placed);
        assert_eq!(created.table_id, 3);

        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains("UPDATE") && log.contains("tables"));
        assert!(log.contains("INSERT") && log.contains("orders"));
    }

    #[tokio::test]
    async fn create_on_occupied_table_writes_nothing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![table(3, TableStatus::Occupied)]])
            .into_connection();

        let err = service(&db).create(3, 9).await.unwrap_err();
        assert!(matches!(err, AppError::TableNotAvailable(3)));

        let log = format!("{:?}", db.into_transaction_log());
        assert!(!log.contains("UPDATE"));
        assert!(!log.contains("INSERT"));
    }

    #[tokio::test]
    async fn update_status_rejects_unknown_status_before_touching_store() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let err = service(&db).update_status(7, "Cooked").await.unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidEnumValue { field: "order status", .. }
        ));
        assert!(db.into_transaction_log().is_empty());
    }

    #[tokio::test]
    async fn update_status_missing_order_fails_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<orders::Model>::new()])
            .into_connection();

        let err = service(&db).update_status(7, "Served").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_status_allows_moving_backward() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![order(7, 3, OrderStatus::Completed)]])
            .append_query_results([vec![order(7, 3, OrderStatus::Placed)]])
            .into_connection();

        let updated = service(&db).update_status(7, "Placed").await.unwrap();
        assert_eq!(updated.status, OrderStatus::Placed);
    }
}
