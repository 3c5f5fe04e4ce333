use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000003_create_amenity_table::Amenity,
    m20260105_000004_create_reservation_table::Reservation,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReservationAmenity::Table)
                    .if_not_exists()
                    .col(pk_auto(ReservationAmenity::Id))
                    .col(integer(ReservationAmenity::ReservationId))
                    .col(integer(ReservationAmenity::AmenityId))
                    .col(integer(ReservationAmenity::Quantity).default(1))
                    .col(big_integer(ReservationAmenity::UnitPriceCents))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_amenity_reservation_id")
                            .from(
                                ReservationAmenity::Table,
                                ReservationAmenity::ReservationId,
                            )
                            .to(Reservation::Table, Reservation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_amenity_amenity_id")
                            .from(ReservationAmenity::Table, ReservationAmenity::AmenityId)
                            .to(Amenity::Table, Amenity::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReservationAmenity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReservationAmenity {
    Table,
    Id,
    ReservationId,
    AmenityId,
    Quantity,
    UnitPriceCents,
}
