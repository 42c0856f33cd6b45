use super::report;
use crate::error::AppResult;
use crate::services::CustomerService;
use crate::utils::input::{prompt, prompt_parse};
use std::io::{BufRead, Write};

pub async fn manage<R, W>(customers: &CustomerService, input: &mut R, out: &mut W) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(out, "\n=== Customer Management ===")?;
        writeln!(out, "1. Add Customer")?;
        writeln!(out, "2. View All Customers")?;
        writeln!(out, "3. Update Customer")?;
        writeln!(out, "4. Delete Customer")?;
        writeln!(out, "5. Exit")?;
        let choice: u32 = prompt_parse(input, out, "Choose an option: ")?;

        match choice {
            1 => {
                let result = add(customers, input, out).await;
                report(out, result)?;
            }
            2 => view_all(customers, out).await?,
            3 => {
                let result = update(customers, input, out).await;
                report(out, result)?;
            }
            4 => {
                let result = delete(customers, input, out).await;
                report(out, result)?;
            }
            5 => break,
            _ => writeln!(out, "Invalid option. Try again.")?,
        }
    }
    Ok(())
}

async fn add<R, W>(customers: &CustomerService, input: &mut R, out: &mut W) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    let name = prompt(input, out, "Name: ")?;
    let phone = prompt(input, out, "Phone: ")?;
    let email = prompt(input, out, "Email: ")?;
    customers.create(&name, &phone, &email).await?;
    writeln!(out, "Customer added successfully.")?;
    Ok(())
}

async fn view_all<W: Write>(customers: &CustomerService, out: &mut W) -> AppResult<()> {
    let all = customers.get_all().await?;
    writeln!(out, "---- Customers ----")?;
    for customer in all {
        writeln!(
            out,
            "{}: {} | {} | {}",
            customer.id, customer.name, customer.phone, customer.email
        )?;
    }
    Ok(())
}

async fn update<R, W>(customers: &CustomerService, input: &mut R, out: &mut W) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    let customer_id: i64 = prompt_parse(input, out, "Enter Customer ID to update: ")?;
    let name = prompt(input, out, "New Name: ")?;
    let phone = prompt(input, out, "New Phone: ")?;
    let email = prompt(input, out, "New Email: ")?;
    customers.update(customer_id, &name, &phone, &email).await?;
    writeln!(out, "Customer updated.")?;
    Ok(())
}

async fn delete<R, W>(customers: &CustomerService, input: &mut R, out: &mut W) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    let customer_id: i64 = prompt_parse(input, out, "Enter Customer ID to delete: ")?;
    customers.delete(customer_id).await?;
    writeln!(out, "Customer deleted.")?;
    Ok(())
}
