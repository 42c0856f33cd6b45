use super::report;
use crate::error::AppResult;
use crate::services::TableService;
use crate::utils::input::{prompt, prompt_parse};
use std::io::{BufRead, Write};

pub async fn manage<R, W>(tables: &TableService, input: &mut R, out: &mut W) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(out, "\n=== Table Management ===")?;
        writeln!(out, "1. Add Table")?;
        writeln!(out, "2. View All Tables")?;
        writeln!(out, "3. Update Table")?;
        writeln!(out, "4. Delete Table")?;
        writeln!(out, "5. Exit")?;
        let choice: u32 = prompt_parse(input, out, "Choose an option: ")?;

        match choice {
            1 => {
                let result = add(tables, input, out).await;
                report(out, result)?;
            }
            2 => view_all(tables, out).await?,
            3 => {
                let result = update(tables, input, out).await;
                report(out, result)?;
            }
            4 => {
                let result = delete(tables, input, out).await;
                report(out, result)?;
            }
            5 => break,
            _ => writeln!(out, "Invalid option. Try again.")?,
        }
    }
    Ok(())
}

async fn add<R, W>(tables: &TableService, input: &mut R, out: &mut W) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    let number: i32 = prompt_parse(input, out, "Table Number: ")?;
    let capacity: i32 = prompt_parse(input, out, "Capacity: ")?;
    tables.create(number, capacity).await?;
    writeln!(out, "Table added successfully.")?;
    Ok(())
}

async fn view_all<W: Write>(tables: &TableService, out: &mut W) -> AppResult<()> {
    let all = tables.get_all().await?;
    writeln!(out, "---- Tables ----")?;
    for table in all {
        writeln!(
            out,
            "{}: Table {} | Capacity: {} | Status: {}",
            table.id, table.number, table.capacity, table.status
        )?;
    }
    Ok(())
}

async fn update<R, W>(tables: &TableService, input: &mut R, out: &mut W) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    view_all(tables, out).await?;
    let table_id: i64 = prompt_parse(input, out, "Enter Table ID to update: ")?;
    let number: i32 = prompt_parse(input, out, "New Table Number: ")?;
    let capacity: i32 = prompt_parse(input, out, "New Capacity: ")?;
    let status = prompt(input, out, "Status (Available/Occupied/Booked/Reserved): ")?;
    tables.update(table_id, number, capacity, &status).await?;
    writeln!(out, "Table updated.")?;
    Ok(())
}

async fn delete<R, W>(tables: &TableService, input: &mut R, out: &mut W) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    view_all(tables, out).await?;
    let table_id: i64 = prompt_parse(input, out, "Enter Table ID to delete: ")?;
    tables.delete(table_id).await?;
    writeln!(out, "Table deleted.")?;
    Ok(())
}
