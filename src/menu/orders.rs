use super::report;
use crate::error::AppResult;
use crate::services::OrderService;
use crate::utils::input::{prompt, prompt_parse};
use std::io::{BufRead, Write};

pub async fn manage<R, W>(orders: &OrderService, input: &mut R, out: &mut W) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(out, "\n=== Order Management ===")?;
        writeln!(out, "1. Add Order")?;
        writeln!(out, "2. View All Orders")?;
        writeln!(out, "3. Update Order Status")?;
        writeln!(out, "4. Delete Order")?;
        writeln!(out, "5. Exit")?;
        let choice: u32 = prompt_parse(input, out, "Choose an option: ")?;

        match choice {
            1 => {
                let result = add(orders, input, out).await;
                report(out, result)?;
            }
            2 => view_all(orders, out).await?,
            3 => {
                let result = update_status(orders, input, out).await;
                report(out, result)?;
            }
            4 => {
                let result = delete(orders, input, out).await;
                report(out, result)?;
            }
            5 => break,
            _ => writeln!(out, "Invalid option. Try again.")?,
        }
    }
    Ok(())
}

async fn add<R, W>(orders: &OrderService, input: &mut R, out: &mut W) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    let free = orders.available_tables().await?;
    if free.is_empty() {
        writeln!(out, "No available tables at the moment.")?;
        return Ok(());
    }
    writeln!(out, "---- Available Tables ----")?;
    for table in &free {
        writeln!(
            out,
            "ID: {} | Table #: {} | Status: {}",
            table.id, table.number, table.status
        )?;
    }

    let table_id: i64 = prompt_parse(input, out, "Table ID: ")?;
    let waiter_id: i64 = prompt_parse(input, out, "Waiter ID: ")?;
    orders.create(table_id, waiter_id).await?;
    writeln!(out, "Order added successfully.")?;
    Ok(())
}

async fn view_all<W: Write>(orders: &OrderService, out: &mut W) -> AppResult<()> {
    let all = orders.get_all().await?;
    writeln!(out, "---- Orders ----")?;
    for order in all {
        writeln!(
            out,
            "{}: Table {} | Waiter: {} | Status: {}",
            order.id, order.table_id, order.waiter_id, order.status
        )?;
    }
    Ok(())
}

async fn update_status<R, W>(orders: &OrderService, input: &mut R, out: &mut W) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    let order_id: i64 = prompt_parse(input, out, "Enter Order ID to update: ")?;
    let status = prompt(input, out, "New Status (Placed/Preparing/Served/Completed): ")?;
    orders.update_status(order_id, &status).await?;
    writeln!(out, "Order status updated.")?;
    Ok(())
}

async fn delete<R, W>(orders: &OrderService, input: &mut R, out: &mut W) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    let order_id: i64 = prompt_parse(input, out, "Enter Order ID to delete: ")?;
    orders.delete(order_id).await?;
    writeln!(out, "Order deleted.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::TableService;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::io::Cursor;

    #[tokio::test]
    async fn invalid_status_is_reported_and_menu_continues() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let orders = OrderService::new(db.clone(), TableService::new(db.clone()));
        let mut input = Cursor::new("3\n42\nCooked\n5\n");
        let mut out = Vec::new();

        manage(&orders, &mut input, &mut out).await.unwrap();

        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("Invalid order status: Cooked"));
        // 子菜单没有被打断, 仍然回到选项提示
        assert!(shown.matches("=== Order Management ===").count() >= 2);
        assert!(db.into_transaction_log().is_empty());
    }

    #[tokio::test]
    async fn add_with_no_free_tables_backs_out() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<crate::entities::tables::Model>::new()])
            .into_connection();
        let orders = OrderService::new(db.clone(), TableService::new(db.clone()));
        let mut input = Cursor::new("1\n5\n");
        let mut out = Vec::new();

        manage(&orders, &mut input, &mut out).await.unwrap();

        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("No available tables at the moment."));
    }
}
