use crate::models::OrderStatus;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

// table_id/waiter_id 只是 id 引用, 不声明关联: 删除桌台不影响既有订单行
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub table_id: i64,
    pub waiter_id: i64,
    pub order_time: DateTime<Utc>,
    pub status: OrderStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
