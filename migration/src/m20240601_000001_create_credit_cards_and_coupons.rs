use sea_orm_migration::prelude::*;

/// Credit Cards (信用卡)
#[derive(DeriveIden)]
enum CreditCards {
    Table,
    Id,
    Name,
    Issuer,
    System,
    Cobranded,
    ImageUrl,
    CreatedAt,
}

/// Coupons (优惠规则，每条属于一张信用卡)
#[derive(DeriveIden)]
enum Coupons {
    Table,
    Id,
    Rate,
    LowerLimit,
    UpperLimit,
    StartDatetime,
    EndDatetime,
    CardId,
    Category,
    Payment,
    Merchant,
    CreatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

/// upper_limit 为 NULL 表示无上限
/// category / payment / merchant 为 0 表示不限（通用）
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CreditCards::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CreditCards::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CreditCards::Name).string_len(64).not_null())
                    .col(ColumnDef::new(CreditCards::Issuer).string_len(64).not_null())
                    .col(ColumnDef::new(CreditCards::System).string_len(64).not_null())
                    .col(
                        ColumnDef::new(CreditCards::Cobranded)
                            .string_len(64)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(CreditCards::ImageUrl)
                            .string_len(256)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(CreditCards::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 外键在建表时声明（SQLite 不支持 ALTER TABLE ADD CONSTRAINT）
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
                    .col(ColumnDef::new(Coupons::Rate).double().not_null())
                    .col(ColumnDef::new(Coupons::LowerLimit).double().not_null())
                    .col(ColumnDef::new(Coupons::UpperLimit).double().null())
                    .col(
                        ColumnDef::new(Coupons::StartDatetime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Coupons::EndDatetime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Coupons::CardId).uuid().not_null())
                    .col(
                        ColumnDef::new(Coupons::Category)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Coupons::Payment)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Coupons::Merchant)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Coupons::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_coupons_card")
                            .from(Coupons::Table, Coupons::CardId)
                            .to(CreditCards::Table, CreditCards::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // 按卡查询优惠
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_coupons_card")
                    .table(Coupons::Table)
                    .col(Coupons::CardId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 删除顺序：优惠 -> 信用卡
        manager
            .drop_table(Table::drop().if_exists().table(Coupons::Table).to_owned())
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .if_exists()
                    .table(CreditCards::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
