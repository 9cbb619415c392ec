use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000002_war::War;

static IDX_WAR_ALERT_WAR_ID_ALERT_TYPE: &str = "idx_war_alert_war_id_alert_type";
static FK_WAR_ALERT_WAR_ID: &str = "fk_war_alert_war_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WarAlert::Table)
                    .if_not_exists()
                    .col(pk_auto(WarAlert::Id))
                    .col(integer(WarAlert::WarId))
                    .col(string_len(WarAlert::AlertType, 32))
                    .col(text(WarAlert::Message))
                    .col(boolean(WarAlert::IsRead).default(false))
                    .col(timestamp(WarAlert::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // One alert of each type per war
        manager
            .create_index(
                Index::create()
                    .name(IDX_WAR_ALERT_WAR_ID_ALERT_TYPE)
                    .table(WarAlert::Table)
                    .col(WarAlert::WarId)
                    .col(WarAlert::AlertType)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_WAR_ALERT_WAR_ID)
                    .from_tbl(WarAlert::Table)
                    .from_col(WarAlert::WarId)
                    .to_tbl(War::Table)
                    .to_col(War::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .on_update(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_WAR_ALERT_WAR_ID)
                    .table(WarAlert::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_WAR_ALERT_WAR_ID_ALERT_TYPE)
                    .table(WarAlert::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(WarAlert::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum WarAlert {
    Table,
    Id,
    WarId,
    AlertType,
    Message,
    IsRead,
    CreatedAt,
}
