use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_alliance::Alliance;

static IDX_WAR_ALLIANCE_ID_PNW_WAR_ID: &str = "idx_war_alliance_id_pnw_war_id";
static IDX_WAR_ALLIANCE_ID_IS_ACTIVE: &str = "idx_war_alliance_id_is_active";
static FK_WAR_ALLIANCE_ID: &str = "fk_war_alliance_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(War::Table)
                    .if_not_exists()
                    .col(pk_auto(War::Id))
                    .col(integer(War::AllianceId))
                    .col(big_integer(War::PnwWarId))
                    .col(big_integer(War::AttackerId))
                    .col(string(War::AttackerName))
                    .col(big_integer_null(War::AttackerAllianceId))
                    .col(big_integer(War::DefenderId))
                    .col(string(War::DefenderName))
                    .col(big_integer_null(War::DefenderAllianceId))
                    .col(string_len(War::WarType, 16))
                    .col(big_integer_null(War::WinnerId))
                    .col(timestamp(War::WarStarted))
                    .col(timestamp_null(War::WarEnded))
                    .col(boolean(War::IsDefensive))
                    .col(boolean(War::IsActive))
                    .col(timestamp(War::CreatedAt))
                    .col(timestamp(War::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // Not unique: a deactivated war keeps its row and a reused war ID gets a new one
        manager
            .create_index(
                Index::create()
                    .name(IDX_WAR_ALLIANCE_ID_PNW_WAR_ID)
                    .table(War::Table)
                    .col(War::AllianceId)
                    .col(War::PnwWarId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_WAR_ALLIANCE_ID_IS_ACTIVE)
                    .table(War::Table)
                    .col(War::AllianceId)
                    .col(War::IsActive)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_WAR_ALLIANCE_ID)
                    .from_tbl(War::Table)
                    .from_col(War::AllianceId)
                    .to_tbl(Alliance::Table)
                    .to_col(Alliance::Id)
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
                    .name(FK_WAR_ALLIANCE_ID)
                    .table(War::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_WAR_ALLIANCE_ID_IS_ACTIVE)
                    .table(War::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_WAR_ALLIANCE_ID_PNW_WAR_ID)
                    .table(War::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(War::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum War {
    Table,
    Id,
    AllianceId,
    PnwWarId,
    AttackerId,
    AttackerName,
    AttackerAllianceId,
    DefenderId,
    DefenderName,
    DefenderAllianceId,
    WarType,
    WinnerId,
    WarStarted,
    WarEnded,
    IsDefensive,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
