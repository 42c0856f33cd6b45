use super::report;
use crate::error::AppResult;
use crate::services::UserService;
use crate::utils::input::{prompt, prompt_parse};
use std::io::{BufRead, Write};

pub async fn manage<R, W>(users: &UserService, input: &mut R, out: &mut W) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(out, "\n=== User Management ===")?;
        writeln!(out, "1. Add User")?;
        writeln!(out, "2. View All Users")?;
        writeln!(out, "3. Update User Email")?;
        writeln!(out, "4. Delete User")?;
        writeln!(out, "5. Exit")?;
        let choice: u32 = prompt_parse(input, out, "Choose an option: ")?;

        match choice {
            1 => {
                let result = add(users, input, out).await;
                report(out, result)?;
            }
            2 => view_all(users, out).await?,
            3 => {
                let result = update_email(users, input, out).await;
                report(out, result)?;
            }
            4 => {
                let result = delete(users, input, out).await;
                report(out, result)?;
            }
            5 => break,
            _ => writeln!(out, "Invalid option. Try again.")?,
        }
    }
    Ok(())
}

async fn add<R, W>(users: &UserService, input: &mut R, out: &mut W) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    let username = prompt(input, out, "Username: ")?;
    let password = prompt(input, out, "Password: ")?;
    let email = prompt(input, out, "Email: ")?;
    let phone = prompt(input, out, "Phone: ")?;
    let role = prompt(input, out, "Role (Manager/Waiter/KitchenStaff): ")?;
    users
        .create(&username, &password, &email, &phone, &role)
        .await?;
    writeln!(out, "User added successfully.")?;
    Ok(())
}

async fn view_all<W: Write>(users: &UserService, out: &mut W) -> AppResult<()> {
    let all = users.get_all().await?;
    writeln!(out, "---- Users ----")?;
    for user in all {
        writeln!(
            out,
            "{}: {} | {} | {}",
            user.id, user.username, user.role, user.email
        )?;
    }
    Ok(())
}

async fn update_email<R, W>(users: &UserService, input: &mut R, out: &mut W) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    let user_id: i64 = prompt_parse(input, out, "Enter User ID to update: ")?;
    let email = prompt(input, out, "New Email: ")?;
    users.update_email(user_id, &email).await?;
    writeln!(out, "Email updated.")?;
    Ok(())
}

async fn delete<R, W>(users: &UserService, input: &mut R, out: &mut W) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    let user_id: i64 = prompt_parse(input, out, "Enter User ID to delete: ")?;
    users.delete(user_id).await?;
    writeln!(out, "User deleted.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::io::Cursor;

    #[tokio::test]
    async fn unknown_role_is_reported_and_menu_continues() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let users = UserService::new(db.clone());
        let mut input = Cursor::new("1\nana\nsecret\nana@example.com\n111\nChef\n5\n");
        let mut out = Vec::new();

        manage(&users, &mut input, &mut out).await.unwrap();

        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("Invalid role: Chef"));
        assert!(!shown.contains("User added successfully."));
        assert!(db.into_transaction_log().is_empty());
    }
}
