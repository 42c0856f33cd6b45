use super::report;
use crate::error::AppResult;
use crate::services::PaymentService;
use crate::utils::input::{prompt, prompt_parse};
use std::io::{BufRead, Write};

pub async fn manage<R, W>(payments: &PaymentService, input: &mut R, out: &mut W) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(out, "\n=== Payment Management ===")?;
        writeln!(out, "1. Record Payment")?;
        writeln!(out, "2. View All Payments")?;
        writeln!(out, "3. View Payment by Bill ID")?;
        writeln!(out, "4. Exit")?;
        let choice: u32 = prompt_parse(input, out, "Choose an option: ")?;

        match choice {
            1 => {
                let result = record(payments, input, out).await;
                report(out, result)?;
            }
            2 => view_all(payments, out).await?,
            3 => view_by_bill(payments, input, out).await?,
            4 => break,
            _ => writeln!(out, "Invalid option. Try again.")?,
        }
    }
    Ok(())
}

async fn record<R, W>(payments: &PaymentService, input: &mut R, out: &mut W) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    let bill_id: i64 = prompt_parse(input, out, "Bill ID: ")?;
    let method = prompt(input, out, "Payment Method (Cash/Card/UPI/Wallet): ")?;
    let amount_paid: f64 = prompt_parse(input, out, "Amount Paid: ")?;
    payments.record(bill_id, &method, amount_paid).await?;
    writeln!(out, "Payment recorded successfully.")?;
    Ok(())
}

async fn view_all<W: Write>(payments: &PaymentService, out: &mut W) -> AppResult<()> {
    let all = payments.get_all().await?;
    writeln!(out, "---- Payments ----")?;
    for payment in all {
        writeln!(
            out,
            "{}: Bill {} | Method: {} | Amount: {}",
            payment.id, payment.bill_id, payment.method, payment.amount_paid
        )?;
    }
    Ok(())
}

async fn view_by_bill<R, W>(payments: &PaymentService, input: &mut R, out: &mut W) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    let bill_id: i64 = prompt_parse(input, out, "Enter Bill ID: ")?;
    match payments.by_bill_id(bill_id).await? {
        Some(payment) => writeln!(
            out,
            "Payment ID: {} | Amount: {} | Method: {}",
            payment.id, payment.amount_paid, payment.method
        )?,
        None => writeln!(out, "Payment not found for this bill.")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::io::Cursor;

    #[tokio::test]
    async fn unknown_method_is_reported_and_menu_continues() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let payments = PaymentService::new(db.clone());
        let mut input = Cursor::new("1\n12\nBitcoin\n95\n4\n");
        let mut out = Vec::new();

        manage(&payments, &mut input, &mut out).await.unwrap();

        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("Invalid payment method: Bitcoin"));
        assert!(!shown.contains("Payment recorded successfully."));
        assert!(db.into_transaction_log().is_empty());
    }
}
