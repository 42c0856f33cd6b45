use crate::error::AppError;
use sea_orm::entity::prelude::*;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(None)")]
pub enum BillStatus {
    #[sea_orm(string_value = "Unpaid")]
    Unpaid,
    #[sea_orm(string_value = "Paid")]
    Paid,
}

impl std::fmt::Display for BillStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BillStatus::Unpaid => write!(f, "Unpaid"),
            BillStatus::Paid => write!(f, "Paid"),
        }
    }
}

impl FromStr for BillStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Unpaid" => Ok(BillStatus::Unpaid),
            "Paid" => Ok(BillStatus::Paid),
            other => Err(AppError::invalid_enum("bill payment status", other)),
        }
    }
}
