use sea_orm_migration::{prelude::*, schema::*};

static IDX_ALLIANCE_PNW_ALLIANCE_ID: &str = "idx_alliance_pnw_alliance_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alliance::Table)
                    .if_not_exists()
                    .col(pk_auto(Alliance::Id))
                    .col(string_uniq(Alliance::Slug))
                    .col(string(Alliance::Name))
                    .col(big_integer_null(Alliance::PnwAllianceId))
                    .col(string_null(Alliance::DiscordGuildId))
                    .col(string_null(Alliance::DiscordRaidChannelId))
                    .col(boolean(Alliance::DiscordBotEnabled).default(false))
                    .col(text_null(Alliance::PnwApiKey))
                    .col(timestamp(Alliance::CreatedAt))
                    .col(timestamp(Alliance::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ALLIANCE_PNW_ALLIANCE_ID)
                    .table(Alliance::Table)
                    .col(Alliance::PnwAllianceId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ALLIANCE_PNW_ALLIANCE_ID)
                    .table(Alliance::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Alliance::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Alliance {
    Table,
    Id,
    Slug,
    Name,
    PnwAllianceId,
    DiscordGuildId,
    DiscordRaidChannelId,
    DiscordBotEnabled,
    PnwApiKey,
    CreatedAt,
    UpdatedAt,
}
