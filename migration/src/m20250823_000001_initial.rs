use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::Statement;

/// Users (转盘余额直接挂在用户表上)
#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Email,
    FirstName,
    LastName,
    IsAdmin,
    SpinsRemaining,
    TotalSpinsUsed,
    CreatedAt,
    UpdatedAt,
}

/// Prizes (转盘奖品配置表)
#[derive(DeriveIden)]
enum Prizes {
    Table,
    Id,
    Name,
    Description,
    PrizeType,
    Value,
    GoldGrams,
    SilverGrams,
    Probability,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

/// Coupons (抽奖发放的优惠券)
#[derive(DeriveIden)]
enum Coupons {
    Table,
    Id,
    Code,
    UserId,
    PrizeId,
    Value,
    GoldGrams,
    SilverGrams,
    IsRedeemed,
    RedeemedAt,
    ExpiresAt,
    CreatedAt,
}

/// Products (金银商品)
#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    Name,
    Description,
    Category,
    PricePerGram,
    WeightGrams,
    TotalPrice,
    ImageUrl,
    InStock,
    CreatedAt,
    UpdatedAt,
}

/// Orders (订单)
#[derive(DeriveIden)]
enum Orders {
    Table,
    Id,
    UserId,
    ProductId,
    CouponId,
    OriginalPrice,
    DiscountAmount,
    FinalPrice,
    Status,
    PaymentIntentId,
    CreatedAt,
    UpdatedAt,
}

/// Wheel Spins (抽奖流水, 只增不删)
#[derive(DeriveIden)]
enum WheelSpins {
    Table,
    Id,
    UserId,
    PrizeId,
    CouponId,
    CreatedAt,
}

/// Wheel Config (转盘全局配置, 单行)
#[derive(DeriveIden)]
enum WheelConfig {
    Table,
    Id,
    EntryPrice,
    SpinsPerEntry,
    IsActive,
    UpdatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

/// probability 为相对权重 (0-100)，不要求各奖品之和等于 100。
/// 初始奖品配置（与运营确认的默认转盘）:
/// - 0.5g Silver Coin    (free_silver, ₹45)  25%
/// - ₹50 Off Coupon      (discount,    ₹50)  20%
/// - 1g Silver Coin      (free_silver, ₹90)  15%
/// - ₹100 Off Coupon     (discount,    ₹100) 14%
/// - 0.1g Gold Foil      (free_gold,   ₹650) 10%
/// - Gold + Silver Combo (combo,       ₹750)  8%
/// - 0.25g Gold Coin     (free_gold,  ₹1625)  5%
/// - 1g Gold Coin        (free_gold,  ₹6500)  3%
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 用户表
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
                    .col(ColumnDef::new(Users::Email).string_len(255).not_null())
                    .col(ColumnDef::new(Users::FirstName).string_len(255).null())
                    .col(ColumnDef::new(Users::LastName).string_len(255).null())
                    .col(
                        ColumnDef::new(Users::IsAdmin)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Users::SpinsRemaining)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Users::TotalSpinsUsed)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
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
                    .name("idx_users_email_unique")
                    .table(Users::Table)
                    .col(Users::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 奖品表
        manager
            .create_table(
                Table::create()
                    .table(Prizes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Prizes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Prizes::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Prizes::Description).text().null())
                    .col(ColumnDef::new(Prizes::PrizeType).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Prizes::Value)
                            .double()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Prizes::GoldGrams)
                            .double()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Prizes::SilverGrams)
                            .double()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Prizes::Probability)
                            .double()
                            .not_null()
                            .default(10),
                    )
                    .col(
                        ColumnDef::new(Prizes::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Prizes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .col(
                        ColumnDef::new(Prizes::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .to_owned(),
            )
            .await?;

        // 优惠券表
        manager
            .create_table(
                Table::create()
                    .table(Coupons::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Coupons::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Coupons::Code).string_len(20).not_null())
                    .col(ColumnDef::new(Coupons::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Coupons::PrizeId).big_integer().not_null())
                    .col(ColumnDef::new(Coupons::Value).double().not_null())
                    .col(
                        ColumnDef::new(Coupons::GoldGrams)
                            .double()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Coupons::SilverGrams)
                            .double()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Coupons::IsRedeemed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Coupons::RedeemedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Coupons::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Coupons::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .to_owned(),
            )
            .await?;

        // code 是兑换时的查找键，必须唯一
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_coupons_code_unique")
                    .table(Coupons::Table)
                    .col(Coupons::Code)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_coupons_user")
                    .table(Coupons::Table)
                    .col(Coupons::UserId)
                    .to_owned(),
            )
            .await?;

        // 商品表
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Products::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Products::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Products::Description).text().null())
                    .col(
                        ColumnDef::new(Products::Category)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Products::PricePerGram).double().not_null())
                    .col(ColumnDef::new(Products::WeightGrams).double().not_null())
                    .col(ColumnDef::new(Products::TotalPrice).double().not_null())
                    .col(ColumnDef::new(Products::ImageUrl).string_len(1024).null())
                    .col(
                        ColumnDef::new(Products::InStock)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Products::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .col(
                        ColumnDef::new(Products::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .to_owned(),
            )
            .await?;

        // 订单表
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
                    .col(ColumnDef::new(Orders::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Orders::ProductId).big_integer().not_null())
                    .col(ColumnDef::new(Orders::CouponId).big_integer().null())
                    .col(ColumnDef::new(Orders::OriginalPrice).double().not_null())
                    .col(
                        ColumnDef::new(Orders::DiscountAmount)
                            .double()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Orders::FinalPrice).double().not_null())
                    .col(
                        ColumnDef::new(Orders::Status)
                            .string_len(50)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Orders::PaymentIntentId)
                            .string_len(255)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Orders::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .col(
                        ColumnDef::new(Orders::UpdatedAt)
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
                    .name("idx_orders_user")
                    .table(Orders::Table)
                    .col(Orders::UserId)
                    .to_owned(),
            )
            .await?;

        // 抽奖流水表
        manager
            .create_table(
                Table::create()
                    .table(WheelSpins::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WheelSpins::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WheelSpins::UserId).big_integer().not_null())
                    .col(
                        ColumnDef::new(WheelSpins::PrizeId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WheelSpins::CouponId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WheelSpins::CreatedAt)
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
                    .name("idx_wheel_spins_user")
                    .table(WheelSpins::Table)
                    .col(WheelSpins::UserId)
                    .to_owned(),
            )
            .await?;

        // 外键（不加 ON DELETE CASCADE，保证抽奖历史不随奖品删除丢失）
        manager
            .alter_table(
                Table::alter()
                    .table(WheelSpins::Table)
                    .add_foreign_key(
                        TableForeignKey::new()
                            .name("fk_wheel_spins_prize")
                            .from_tbl(WheelSpins::Table)
                            .from_col(WheelSpins::PrizeId)
                            .to_tbl(Prizes::Table)
                            .to_col(Prizes::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(WheelSpins::Table)
                    .add_foreign_key(
                        TableForeignKey::new()
                            .name("fk_wheel_spins_coupon")
                            .from_tbl(WheelSpins::Table)
                            .from_col(WheelSpins::CouponId)
                            .to_tbl(Coupons::Table)
                            .to_col(Coupons::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // 转盘配置表 (单行)
        manager
            .create_table(
                Table::create()
                    .table(WheelConfig::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WheelConfig::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(WheelConfig::EntryPrice)
                            .double()
                            .not_null()
                            .default(10),
                    )
                    .col(
                        ColumnDef::new(WheelConfig::SpinsPerEntry)
                            .integer()
                            .not_null()
                            .default(2),
                    )
                    .col(
                        ColumnDef::new(WheelConfig::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(WheelConfig::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .to_owned(),
            )
            .await?;

        // 初始化默认配置与奖品
        let conn = manager.get_connection();

        conn.execute(Statement::from_string(
            manager.get_database_backend(),
            r#"
INSERT INTO wheel_config (entry_price, spins_per_entry, is_active)
SELECT 10, 2, TRUE
WHERE NOT EXISTS (SELECT 1 FROM wheel_config);
"#
            .to_string(),
        ))
        .await?;

        let insert_prizes = r#"
INSERT INTO prizes (name, description, prize_type, value, gold_grams, silver_grams, probability, is_active)
VALUES
 ('0.5g Silver Coin', 'Pure 999 silver coin', 'free_silver', 45, 0, 0.5, 25, TRUE),
 ('Rs.50 Off Coupon', 'Flat discount on any purchase', 'discount', 50, 0, 0, 20, TRUE),
 ('1g Silver Coin', 'Pure 999 silver coin', 'free_silver', 90, 0, 1, 15, TRUE),
 ('Rs.100 Off Coupon', 'Flat discount on any purchase', 'discount', 100, 0, 0, 14, TRUE),
 ('0.1g Gold Foil', '24K gold foil note', 'free_gold', 650, 0.1, 0, 10, TRUE),
 ('Gold + Silver Combo', '0.1g gold foil with 1g silver coin', 'combo', 750, 0.1, 1, 8, TRUE),
 ('0.25g Gold Coin', '24K gold coin', 'free_gold', 1625, 0.25, 0, 5, TRUE),
 ('1g Gold Coin', '24K gold coin', 'free_gold', 6500, 1, 0, 3, TRUE);
"#;
        conn.execute(Statement::from_string(
            manager.get_database_backend(),
            insert_prizes.to_string(),
        ))
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 删除顺序：流水/订单 -> 券 -> 奖品/商品 -> 用户/配置
        manager
            .drop_table(
                Table::drop()
                    .if_exists()
                    .table(WheelSpins::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(Orders::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(Coupons::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(Prizes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(Products::Table).to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .if_exists()
                    .table(WheelConfig::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}
