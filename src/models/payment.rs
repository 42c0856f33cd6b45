use crate::error::AppError;
use sea_orm::entity::prelude::*;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(None)")]
pub enum PaymentMethod {
    #[sea_orm(string_value = "Cash")]
    Cash,
    #[sea_orm(string_value = "Card")]
    Card,
    #[sea_orm(string_value = "UPI")]
    Upi,
    #[sea_orm(string_value = "Wallet")]
    Wallet,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Cash => write!(f, "Cash"),
            PaymentMethod::Card => write!(f, "Card"),
            PaymentMethod::Upi => write!(f, "UPI"),
            PaymentMethod::Wallet => write!(f, "Wallet"),
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Cash" => Ok(PaymentMethod::Cash),
            "Card" => Ok(PaymentMethod::Card),
            "UPI" => Ok(PaymentMethod::Upi),
            "Wallet" => Ok(PaymentMethod::Wallet),
            other => Err(AppError::invalid_enum("payment method", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(None)")]
pub enum PaymentStatus {
    #[sea_orm(string_value = "Successful")]
    Successful,
    #[sea_orm(string_value = "Failed")]
    Failed,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Successful => write!(f, "Successful"),
            PaymentStatus::Failed => write!(f, "Failed"),
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Successful" => Ok(PaymentStatus::Successful),
            "Failed" => Ok(PaymentStatus::Failed),
            other => Err(AppError::invalid_enum("payment status", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_parses_upi_literal() {
        assert_eq!("UPI".parse::<PaymentMethod>().unwrap(), PaymentMethod::Upi);
        assert_eq!(PaymentMethod::Upi.to_string(), "UPI");
    }

    #[test]
    fn method_rejects_unknown() {
        let err = "Bitcoin".parse::<PaymentMethod>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid payment method: Bitcoin");
    }
}
