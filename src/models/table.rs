use crate::error::AppError;
use sea_orm::entity::prelude::*;
use std::str::FromStr;

/// Booked/Reserved 只能通过桌台管理菜单直接赋值, 工作流不会产生
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(None)")]
pub enum TableStatus {
    #[sea_orm(string_value = "Available")]
    Available,
    #[sea_orm(string_value = "Occupied")]
    Occupied,
    #[sea_orm(string_value = "Booked")]
    Booked,
    #[sea_orm(string_value = "Reserved")]
    Reserved,
}

impl std::fmt::Display for TableStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableStatus::Available => write!(f, "Available"),
            TableStatus::Occupied => write!(f, "Occupied"),
            TableStatus::Booked => write!(f, "Booked"),
            TableStatus::Reserved => write!(f, "Reserved"),
        }
    }
}

impl FromStr for TableStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(TableStatus::Available),
            "Occupied" => Ok(TableStatus::Occupied),
            "Booked" => Ok(TableStatus::Booked),
            "Reserved" => Ok(TableStatus::Reserved),
            other => Err(AppError::invalid_enum("table status", other)),
        }
    }
}
