use super::report;
use crate::error::AppResult;
use crate::services::BillService;
use crate::utils::input::prompt_parse;
use std::io::{BufRead, Write};

pub async fn manage<R, W>(bills: &BillService, input: &mut R, out: &mut W) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(out, "\n=== Bill Management ===")?;
        writeln!(out, "1. Generate Bill")?;
        writeln!(out, "2. View All Bills")?;
        writeln!(out, "3. View Bill by Order ID")?;
        writeln!(out, "4. View Unpaid Bills")?;
        writeln!(out, "5. Update Bill")?;
        writeln!(out, "6. Delete Bill")?;
        writeln!(out, "7. Exit")?;
        let choice: u32 = prompt_parse(input, out, "Choose an option: ")?;

        match choice {
            1 => {
                let result = generate(bills, input, out).await;
                report(out, result)?;
            }
            2 => view_all(bills, out).await?,
            3 => view_by_order(bills, input, out).await?,
            4 => view_unpaid(bills, out).await?,
            5 => {
                let result = update(bills, input, out).await;
                report(out, result)?;
            }
            6 => {
                let result = delete(bills, input, out).await;
                report(out, result)?;
            }
            7 => break,
            _ => writeln!(out, "Invalid option. Try again.")?,
        }
    }
    Ok(())
}

async fn generate<R, W>(bills: &BillService, input: &mut R, out: &mut W) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    let order_id: i64 = prompt_parse(input, out, "Order ID: ")?;
    let total: f64 = prompt_parse(input, out, "Total Amount: ")?;
    let discount: f64 = prompt_parse(input, out, "Discount: ")?;
    let tax: f64 = prompt_parse(input, out, "Tax: ")?;
    bills.generate(order_id, total, discount, tax).await?;
    writeln!(out, "Bill generated successfully.")?;
    Ok(())
}

async fn view_all<W: Write>(bills: &BillService, out: &mut W) -> AppResult<()> {
    let all = bills.get_all().await?;
    writeln!(out, "---- Bills ----")?;
    for bill in all {
        writeln!(
            out,
            "{}: Order {} | Total: {} | Final: {} | Status: {}",
            bill.id, bill.order_id, bill.total_amount, bill.final_amount, bill.payment_status
        )?;
    }
    Ok(())
}

async fn view_by_order<R, W>(bills: &BillService, input: &mut R, out: &mut W) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    let order_id: i64 = prompt_parse(input, out, "Enter Order ID: ")?;
    match bills.by_order_id(order_id).await? {
        Some(bill) => writeln!(
            out,
            "Bill ID: {} | Total: {} | Final: {}",
            bill.id, bill.total_amount, bill.final_amount
        )?,
        None => writeln!(out, "Bill not found for this order.")?,
    }
    Ok(())
}

async fn view_unpaid<W: Write>(bills: &BillService, out: &mut W) -> AppResult<()> {
    let unpaid = bills.list_unpaid().await?;
    writeln!(out, "---- Unpaid Bills ----")?;
    for bill in unpaid {
        writeln!(
            out,
            "{}: Order {} | Final Amount: {}",
            bill.id, bill.order_id, bill.final_amount
        )?;
    }
    Ok(())
}

async fn update<R, W>(bills: &BillService, input: &mut R, out: &mut W) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    let bill_id: i64 = prompt_parse(input, out, "Enter Bill ID to update: ")?;
    let total: f64 = prompt_parse(input, out, "New Total Amount: ")?;
    let discount: f64 = prompt_parse(input, out, "New Discount: ")?;
    let tax: f64 = prompt_parse(input, out, "New Tax: ")?;
    bills.update(bill_id, total, discount, tax).await?;
    writeln!(out, "Bill updated.")?;
    Ok(())
}

async fn delete<R, W>(bills: &BillService, input: &mut R, out: &mut W) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    let bill_id: i64 = prompt_parse(input, out, "Enter Bill ID to delete: ")?;
    bills.delete(bill_id).await?;
    writeln!(out, "Bill deleted.")?;
    Ok(())
}
