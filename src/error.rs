use sea_orm::DbErr;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] DbErr),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid {field}: {value}")]
    InvalidEnumValue { field: &'static str, value: String },

    #[error("Table {0} is not available")]
    TableNotAvailable(i64),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl AppError {
    pub fn invalid_enum(field: &'static str, value: impl Into<String>) -> Self {
        AppError::InvalidEnumValue {
            field,
            value: value.into(),
        }
    }

    /// 可恢复错误在菜单层报告后继续循环, 其余错误结束会话
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::NotFound(_)
                | AppError::InvalidEnumValue { .. }
                | AppError::TableNotAvailable(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recoverable_split() {
        assert!(AppError::NotFound("Order 3".to_string()).is_recoverable());
        assert!(AppError::invalid_enum("order status", "Cooked").is_recoverable());
        assert!(AppError::TableNotAvailable(3).is_recoverable());
        assert!(!AppError::DatabaseError(DbErr::Custom("gone".to_string())).is_recoverable());
        assert!(
            !AppError::IoError(std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof"))
                .is_recoverable()
        );
    }

    #[test]
    fn invalid_enum_keeps_original_string() {
        let err = AppError::invalid_enum("payment method", "Bitcoin");
        assert_eq!(err.to_string(), "Invalid payment method: Bitcoin");
    }
}
