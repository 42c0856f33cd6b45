pub mod bills;
pub mod bookings;
pub mod customers;
pub mod orders;
pub mod payments;
pub mod tables;
pub mod users;

use crate::error::AppResult;
use crate::services::Services;
use crate::utils::input::prompt_parse;
use std::io::{BufRead, Write};

/// 顶层菜单循环。选择 8 正常退出; 存储故障原样上抛结束会话。
pub async fn run<R, W>(services: &Services, input: &mut R, out: &mut W) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(out, "\n=== Restaurant Management System ===")?;
        writeln!(out, "1. User Management")?;
        writeln!(out, "2. Customer Management")?;
        writeln!(out, "3. Table Management")?;
        writeln!(out, "4. Order Management")?;
        writeln!(out, "5. Bill Management")?;
        writeln!(out, "6. Payment Management")?;
        writeln!(out, "7. Table Booking Management")?;
        writeln!(out, "8. Exit")?;
        let choice: u32 = prompt_parse(input, out, "Choose an option: ")?;

        match choice {
            1 => users::manage(&services.users, input, out).await?,
            2 => customers::manage(&services.customers, input, out).await?,
            3 => tables::manage(&services.tables, input, out).await?,
            4 => orders::manage(&services.orders, input, out).await?,
            5 => bills::manage(&services.bills, input, out).await?,
            6 => payments::manage(&services.payments, input, out).await?,
            7 => bookings::manage(&services.bookings, input, out).await?,
            8 => {
                writeln!(out, "Exiting...")?;
                return Ok(());
            }
            _ => writeln!(out, "Invalid option. Try again.")?,
        }
    }
}

/// 可恢复错误(查无此行/非法枚举/桌台不可用)打印后继续循环, 其余错误上抛
pub(crate) fn report<W: Write>(out: &mut W, result: AppResult<()>) -> AppResult<()> {
    match result {
        Err(err) if err.is_recoverable() => {
            log::warn!("operation rejected: {err}");
            writeln!(out, "{err}")?;
            Ok(())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::io::Cursor;

    #[tokio::test]
    async fn exit_terminates_normally() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let services = Services::new(db);
        let mut input = Cursor::new("8\n");
        let mut out = Vec::new();

        run(&services, &mut input, &mut out).await.unwrap();

        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("=== Restaurant Management System ==="));
        assert!(shown.contains("Exiting..."));
    }

    #[tokio::test]
    async fn unknown_option_reprompts() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let services = Services::new(db);
        let mut input = Cursor::new("9\n8\n");
        let mut out = Vec::new();

        run(&services, &mut input, &mut out).await.unwrap();

        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("Invalid option. Try again."));
        assert!(shown.contains("Exiting..."));
    }
}
