use crate::error::AppError;
use sea_orm::entity::prelude::*;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(None)")]
pub enum Role {
    #[sea_orm(string_value = "Manager")]
    Manager,
    #[sea_orm(string_value = "Waiter")]
    Waiter,
    #[sea_orm(string_value = "KitchenStaff")]
    KitchenStaff,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Manager => write!(f, "Manager"),
            Role::Waiter => write!(f, "Waiter"),
            Role::KitchenStaff => write!(f, "KitchenStaff"),
        }
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Manager" => Ok(Role::Manager),
            "Waiter" => Ok(Role::Waiter),
            "KitchenStaff" => Ok(Role::KitchenStaff),
            other => Err(AppError::invalid_enum("role", other)),
        }
    }
}
