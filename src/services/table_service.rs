use crate::entities::tables;
use crate::error::{AppError, AppResult};
use crate::models::TableStatus;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, Set,
};

#[derive(Clone)]
pub struct TableService {
    pool: DatabaseConnection,
}

impl TableService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 新桌台总是以 Available 状态入库
    pub async fn create(&self, number: i32, capacity: i32) -> AppResult<tables::Model> {
        let table = tables::ActiveModel {
            number: Set(number),
            capacity: Set(capacity),
            status: Set(TableStatus::Available),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;
        Ok(table)
    }

    pub async fn get_all(&self) -> AppResult<Vec<tables::Model>> {
        let all = tables::Entity::find()
            .order_by_asc(tables::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(all)
    }

    pub async fn get_by_id(&self, table_id: i64) -> AppResult<Option<tables::Model>> {
        Ok(tables::Entity::find_by_id(table_id).one(&self.pool).await?)
    }

    pub async fn available(&self) -> AppResult<Vec<tables::Model>> {
        let free = tables::Entity::find()
            .filter(tables::Column::Status.eq(TableStatus::Available))
            .order_by_asc(tables::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(free)
    }

    /// 管理路径: 整行覆盖, 状态取字面值 (也是 Booked/Reserved 唯一的入口)
    pub async fn update(
        &self,
        table_id: i64,
        number: i32,
        capacity: i32,
        raw_status: &str,
    ) -> AppResult<tables::Model> {
        let status: TableStatus = raw_status.parse()?;
        let mut model = tables::Entity::find_by_id(table_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Table {table_id}")))?
            .into_active_model();
        model.number = Set(number);
        model.capacity = Set(capacity);
        model.status = Set(status);
        Ok(model.update(&self.pool).await?)
    }

    pub async fn delete(&self, table_id: i64) -> AppResult<()> {
        tables::Entity::delete_by_id(table_id)
            .exec(&self.pool)
            .await?;
        Ok(())
    }

    /// 开单占桌: 仅 Available 可以转为 Occupied。
    /// 连接由调用方传入, 以便在订单事务内执行。
    pub async fn reserve_for_order(
        &self,
        db: &impl ConnectionTrait,
        table_id: i64,
    ) -> AppResult<tables::Model> {
        let table = tables::Entity::find_by_id(table_id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Table {table_id}")))?;
        if table.status != TableStatus::Available {
            return Err(AppError::TableNotAvailable(table_id));
        }
        let mut model = table.into_active_model();
        model.status = Set(TableStatus::Occupied);
        Ok(model.update(db).await?)
    }

    /// 释放桌台。目前没有任何流程在订单完结时调用它, 与既有行为保持一致。
    pub async fn release(&self, table_id: i64) -> AppResult<tables::Model> {
        let mut model = tables::Entity::find_by_id(table_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Table {table_id}")))?
            .into_active_model();
        model.status = Set(TableStatus::Available);
        Ok(model.update(&self.pool).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn table(id: i64, status: TableStatus) -> tables::Model {
        tables::Model {
            id,
            number: id as i32,
            capacity: 4,
            status,
        }
    }

    #[tokio::test]
    async fn reserve_occupied_table_fails_without_writing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![table(3, TableStatus::Occupied)]])
            .into_connection();
        let service = TableService::new(db.clone());

        let err = service.reserve_for_order(&db, 3).await.unwrap_err();
        assert!(matches!(err, AppError::TableNotAvailable(3)));

        let log = format!("{:?}", db.into_transaction_log());
        assert!(!log.contains("UPDATE"));
    }

    #[tokio::test]
    async fn reserve_missing_table_fails_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<tables::Model>::new()])
            .into_connection();
        let service = TableService::new(db.clone());

        let err = service.reserve_for_order(&db, 42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn reserve_available_table_marks_it_occupied() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![table(3, TableStatus::Available)]])
            .append_query_results([vec![table(3, TableStatus::Occupied)]])
            .into_connection();
        let service = TableService::new(db.clone());

        let updated = service.reserve_for_order(&db, 3).await.unwrap();
        assert_eq!(updated.status, TableStatus::Occupied);

        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains("UPDATE"));
        assert!(log.contains("Occupied"));
    }

    #[tokio::test]
    async fn release_sets_table_back_to_available() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![table(3, TableStatus::Occupied)]])
            .append_query_results([vec![table(3, TableStatus::Available)]])
            .into_connection();
        let service = TableService::new(db.clone());

        let updated = service.release(3).await.unwrap();
        assert_eq!(updated.status, TableStatus::Available);
    }

    #[tokio::test]
    async fn delete_missing_table_is_a_noop() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let service = TableService::new(db);

        assert!(service.delete(99).await.is_ok());
    }
}
