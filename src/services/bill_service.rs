use crate::entities::bills;
use crate::error::{AppError, AppResult};
use crate::models::BillStatus;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};

#[derive(Clone)]
pub struct BillService {
    pool: DatabaseConnection,
}

impl BillService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 账单金额是三个输入的纯函数, 不做任何截断, 负数原样保留
    pub fn final_amount(total: f64, discount: f64, tax: f64) -> f64 {
        total - discount + tax
    }

    /// 不校验 order_id 是否存在, 同一订单可以重复出账
    pub async fn generate(
        &self,
        order_id: i64,
        total: f64,
        discount: f64,
        tax: f64,
    ) -> AppResult<bills::Model> {
        let bill = bills::ActiveModel {
            order_id: Set(order_id),
            total_amount: Set(total),
            discount: Set(discount),
            tax: Set(tax),
            final_amount: Set(Self::final_amount(total, discount, tax)),
            payment_status: Set(BillStatus::Unpaid),
            generated_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;
        Ok(bill)
    }

    /// 覆盖三个输入并用同一公式重算 final_amount, 整行写回
    pub async fn update(
        &self,
        bill_id: i64,
        total: f64,
        discount: f64,
        tax: f64,
    ) -> AppResult<bills::Model> {
        let mut model = bills::Entity::find_by_id(bill_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Bill {bill_id}")))?
            .into_active_model();
        model.total_amount = Set(total);
        model.discount = Set(discount);
        model.tax = Set(tax);
        model.final_amount = Set(Self::final_amount(total, discount, tax));
        Ok(model.update(&self.pool).await?)
    }

    pub async fn get_all(&self) -> AppResult<Vec<bills::Model>> {
        let all = bills::Entity::find()
            .order_by_asc(bills::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(all)
    }

    pub async fn list_unpaid(&self) -> AppResult<Vec<bills::Model>> {
        let unpaid = bills::Entity::find()
            .filter(bills::Column::PaymentStatus.eq(BillStatus::Unpaid))
            .order_by_asc(bills::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(unpaid)
    }

    /// 查不到按空结果处理, 由调用方决定如何呈现
    pub async fn by_id(&self, bill_id: i64) -> AppResult<Option<bills::Model>> {
        Ok(bills::Entity::find_by_id(bill_id).one(&self.pool).await?)
    }

    pub async fn by_order_id(&self, order_id: i64) -> AppResult<Option<bills::Model>> {
        let bill = bills::Entity::find()
            .filter(bills::Column::OrderId.eq(order_id))
            .one(&self.pool)
            .await?;
        Ok(bill)
    }

    pub async fn delete(&self, bill_id: i64) -> AppResult<()> {
        bills::Entity::delete_by_id(bill_id)
            .exec(&self.pool)
            .await?;
        Ok(())
    }
}
