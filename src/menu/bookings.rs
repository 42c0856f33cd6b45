use super::report;
use crate::error::AppResult;
use crate::services::BookingService;
use crate::utils::input::{prompt, prompt_parse};
use chrono::{NaiveDate, NaiveTime};
use std::io::{BufRead, Write};

pub async fn manage<R, W>(bookings: &BookingService, input: &mut R, out: &mut W) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(out, "\n=== Table Booking Management ===")?;
        writeln!(out, "1. Add Booking")?;
        writeln!(out, "2. View All Bookings")?;
        writeln!(out, "3. Update Booking Status")?;
        writeln!(out, "4. Delete Booking")?;
        writeln!(out, "5. Exit")?;
        let choice: u32 = prompt_parse(input, out, "Choose an option: ")?;

        match choice {
            1 => {
                let result = add(bookings, input, out).await;
                report(out, result)?;
            }
            2 => view_all(bookings, out).await?,
            3 => {
                let result = update_status(bookings, input, out).await;
                report(out, result)?;
            }
            4 => {
                let result = delete(bookings, input, out).await;
                report(out, result)?;
            }
            5 => break,
            _ => writeln!(out, "Invalid option. Try again.")?,
        }
    }
    Ok(())
}

async fn add<R, W>(bookings: &BookingService, input: &mut R, out: &mut W) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    let customer_id: i64 = prompt_parse(input, out, "Customer ID: ")?;
    let table_id: i64 = prompt_parse(input, out, "Table ID: ")?;
    let booking_date: NaiveDate = prompt_parse(input, out, "Booking Date (YYYY-MM-DD): ")?;
    let booking_time: NaiveTime = prompt_parse(input, out, "Booking Time (HH:MM:SS): ")?;
    bookings
        .create(customer_id, table_id, booking_date, booking_time)
        .await?;
    writeln!(out, "Booking added successfully.")?;
    Ok(())
}

async fn view_all<W: Write>(bookings: &BookingService, out: &mut W) -> AppResult<()> {
    let all = bookings.get_all().await?;
    writeln!(out, "---- Bookings ----")?;
    for booking in all {
        writeln!(
            out,
            "{}: Customer {} | Table {} | Date: {} | Status: {}",
            booking.id, booking.customer_id, booking.table_id, booking.booking_date, booking.status
        )?;
    }
    Ok(())
}

async fn update_status<R, W>(bookings: &BookingService, input: &mut R, out: &mut W) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    let booking_id: i64 = prompt_parse(input, out, "Enter Booking ID to update: ")?;
    let status = prompt(input, out, "New Status (Confirmed/Cancelled/Completed): ")?;
    bookings.update_status(booking_id, &status).await?;
    writeln!(out, "Booking status updated.")?;
    Ok(())
}

async fn delete<R, W>(bookings: &BookingService, input: &mut R, out: &mut W) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    let booking_id: i64 = prompt_parse(input, out, "Enter Booking ID to delete: ")?;
    bookings.delete(booking_id).await?;
    writeln!(out, "Booking deleted.")?;
    Ok(())
}
