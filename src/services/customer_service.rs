use crate::entities::customers;
use crate::error::{AppError, AppResult};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryOrder, Set,
};

#[derive(Clone)]
pub struct CustomerService {
    pool: DatabaseConnection,
}

impl CustomerService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn create(&self, name: &str, phone: &str, email: &str) -> AppResult<customers::Model> {
        let customer = customers::ActiveModel {
            name: Set(name.to_string()),
            phone: Set(phone.to_string()),
            email: Set(email.to_string()),
            active: Set(true),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;
        Ok(customer)
    }

    pub async fn get_all(&self) -> AppResult<Vec<customers::Model>> {
        let all = customers::Entity::find()
            .order_by_asc(customers::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(all)
    }

    pub async fn update(
        &self,
        customer_id: i64,
        name: &str,
        phone: &str,
        email: &str,
    ) -> AppResult<customers::Model> {
        let mut model = customers::Entity::find_by_id(customer_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Customer {customer_id}")))?
            .into_active_model();
        model.name = Set(name.to_string());
        model.phone = Set(phone.to_string());
        model.email = Set(email.to_string());
        Ok(model.update(&self.pool).await?)
    }

    pub async fn delete(&self, customer_id: i64) -> AppResult<()> {
        customers::Entity::delete_by_id(customer_id)
            .exec(&self.pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    #[tokio::test]
    async fn delete_missing_customer_is_a_noop() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let service = CustomerService::new(db);

        assert!(service.delete(404).await.is_ok());
    }
}
