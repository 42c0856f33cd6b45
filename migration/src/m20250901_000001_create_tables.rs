use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    Password,
    Email,
    Phone,
    Role,
    Active,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Customers {
    Table,
    Id,
    Name,
    Phone,
    Email,
    Active,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Tables {
    Table,
    Id,
    Number,
    Capacity,
    Status,
}

#[derive(DeriveIden)]
enum Orders {
    Table,
    Id,
    TableId,
    WaiterId,
    OrderTime,
    Status,
}

#[derive(DeriveIden)]
enum Bills {
    Table,
    Id,
    OrderId,
    TotalAmount,
    Discount,
    Tax,
    FinalAmount,
    PaymentStatus,
    GeneratedAt,
}

#[derive(DeriveIden)]
enum Payments {
    Table,
    Id,
    BillId,
    Method,
    AmountPaid,
    PaymentTime,
    Status,
}

#[derive(DeriveIden)]
enum TableBookings {
    Table,
    Id,
    CustomerId,
    TableId,
    BookingDate,
    BookingTime,
    Status,
    CreatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Username).string().not_null())
                    .col(ColumnDef::new(Users::Password).string().not_null())
                    .col(ColumnDef::new(Users::Email).string().not_null())
                    .col(ColumnDef::new(Users::Phone).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::Active).boolean().not_null())
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Customers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Customers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Customers::Name).string().not_null())
                    .col(ColumnDef::new(Customers::Phone).string().not_null())
                    .col(ColumnDef::new(Customers::Email).string().not_null())
                    .col(ColumnDef::new(Customers::Active).boolean().not_null())
                    .col(
                        ColumnDef::new(Customers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Tables::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tables::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tables::Number).integer().not_null())
                    .col(ColumnDef::new(Tables::Capacity).integer().not_null())
                    .col(ColumnDef::new(Tables::Status).string().not_null())
                    .to_owned(),
            )
            .await?;

        // 跨实体只按 id 引用, 不建外键: 删除无级联, 悬挂引用属于正常状态
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Orders::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Orders::TableId).big_integer().not_null())
                    .col(ColumnDef::new(Orders::WaiterId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Orders::OrderTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Orders::Status).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Bills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Bills::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Bills::OrderId).big_integer().not_null())
                    .col(ColumnDef::new(Bills::TotalAmount).double().not_null())
                    .col(ColumnDef::new(Bills::Discount).double().not_null())
                    .col(ColumnDef::new(Bills::Tax).double().not_null())
                    .col(ColumnDef::new(Bills::FinalAmount).double().not_null())
                    .col(ColumnDef::new(Bills::PaymentStatus).string().not_null())
                    .col(
                        ColumnDef::new(Bills::GeneratedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Payments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Payments::BillId).big_integer().not_null())
                    .col(ColumnDef::new(Payments::Method).string().not_null())
                    .col(ColumnDef::new(Payments::AmountPaid).double().not_null())
                    .col(
                        ColumnDef::new(Payments::PaymentTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Payments::Status).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TableBookings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TableBookings::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TableBookings::CustomerId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TableBookings::TableId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TableBookings::BookingDate).date().not_null())
                    .col(ColumnDef::new(TableBookings::BookingTime).time().not_null())
                    .col(ColumnDef::new(TableBookings::Status).string().not_null())
                    .col(
                        ColumnDef::new(TableBookings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_bills_payment_status")
                    .table(Bills::Table)
                    .col(Bills::PaymentStatus)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_bills_order_id")
                    .table(Bills::Table)
                    .col(Bills::OrderId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_payments_bill_id")
                    .table(Payments::Table)
                    .col(Payments::BillId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TableBookings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Payments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Bills::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tables::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Customers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}
