use crate::error::AppError;
use sea_orm::entity::prelude::*;
use std::str::FromStr;

/// 状态之间不约束迁移顺序, 允许任意改动（包括回退）
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(None)")]
pub enum OrderStatus {
    #[sea_orm(string_value = "Placed")]
    Placed,
    #[sea_orm(string_value = "Preparing")]
    Preparing,
    #[sea_orm(string_value = "Served")]
    Served,
    #[sea_orm(string_value = "Completed")]
    Completed,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Placed => write!(f, "Placed"),
            OrderStatus::Preparing => write!(f, "Preparing"),
            OrderStatus::Served => write!(f, "Served"),
            OrderStatus::Completed => write!(f, "Completed"),
        }
    }
}

impl FromStr for OrderStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Placed" => Ok(OrderStatus::Placed),
            "Preparing" => Ok(OrderStatus::Preparing),
            "Served" => Ok(OrderStatus::Served),
            "Completed" => Ok(OrderStatus::Completed),
            other => Err(AppError::invalid_enum("order status", other)),
        }
    }
}
