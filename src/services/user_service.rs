use crate::entities::users;
use crate::error::{AppError, AppResult};
use crate::models::Role;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryOrder, Set,
};

#[derive(Clone)]
pub struct UserService {
    pool: DatabaseConnection,
}

impl UserService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        username: &str,
        password: &str,
        email: &str,
        phone: &str,
        raw_role: &str,
    ) -> AppResult<users::Model> {
        let role: Role = raw_role.parse()?;
        let user = users::ActiveModel {
            username: Set(username.to_string()),
            password: Set(password.to_string()),
            email: Set(email.to_string()),
            phone: Set(phone.to_string()),
            role: Set(role),
            active: Set(true),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;
        Ok(user)
    }

    pub async fn get_all(&self) -> AppResult<Vec<users::Model>> {
        let all = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(all)
    }

    /// 既有更新路径只改邮箱
    pub async fn update_email(&self, user_id: i64, email: &str) -> AppResult<users::Model> {
        let mut model = users::Entity::find_by_id(user_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {user_id}")))?
            .into_active_model();
        model.email = Set(email.to_string());
        Ok(model.update(&self.pool).await?)
    }

    pub async fn delete(&self, user_id: i64) -> AppResult<()> {
        users::Entity::delete_by_id(user_id)
            .exec(&self.pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn create_rejects_unknown_role_before_touching_store() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let service = UserService::new(db.clone());

        let err = service
            .create("ana", "secret", "ana@example.com", "111", "Chef")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidEnumValue { field: "role", .. }));
        assert!(db.into_transaction_log().is_empty());
    }

    #[tokio::test]
    async fn update_email_missing_user_fails_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<users::Model>::new()])
            .into_connection();
        let service = UserService::new(db);

        let err = service.update_email(9, "new@example.com").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
