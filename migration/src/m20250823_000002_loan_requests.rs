use sea_orm_migration::prelude::*;

/// Loan Requests (黄金抵押贷款申请, 管理端审核)
#[derive(DeriveIden)]
enum LoanRequests {
    Table,
    Id,
    UserId,
    GoldWeight,
    GoldPurity,
    RequestedAmount,
    Purpose,
    Status,
    AdminNotes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LoanRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LoanRequests::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(LoanRequests::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LoanRequests::GoldWeight)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LoanRequests::GoldPurity)
                            .string_len(20)
                            .not_null()
                            .default("22K"),
                    )
                    .col(
                        ColumnDef::new(LoanRequests::RequestedAmount)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(LoanRequests::Purpose).text().null())
                    .col(
                        ColumnDef::new(LoanRequests::Status)
                            .string_len(50)
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(LoanRequests::AdminNotes).text().null())
                    .col(
                        ColumnDef::new(LoanRequests::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .col(
                        ColumnDef::new(LoanRequests::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_loan_requests_user")
                    .table(LoanRequests::Table)
                    .col(LoanRequests::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(LoanRequests::Table)
                    .add_foreign_key(
                        TableForeignKey::new()
                            .name("fk_loan_requests_user")
                            .from_tbl(LoanRequests::Table)
                            .from_col(LoanRequests::UserId)
                            .to_tbl(Users::Table)
                            .to_col(Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .if_exists()
                    .table(LoanRequests::Table)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}
