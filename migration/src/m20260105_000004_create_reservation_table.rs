use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_user_table::User, m20260105_000002_create_room_table::Room,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(integer(Reservation::UserId))
                    .col(integer(Reservation::RoomId))
                    .col(date(Reservation::CheckInDate))
                    .col(date(Reservation::CheckOutDate))
                    .col(integer(Reservation::NumAdults).default(1))
                    .col(integer(Reservation::NumChildren).default(0))
                    .col(big_integer(Reservation::TotalPriceCents))
                    .col(big_integer(Reservation::PaidAmountCents).default(0))
                    .col(big_integer(Reservation::DownpaymentCents).default(0))
                    .col(string(Reservation::PaymentType).default("full_payment"))
                    .col(string(Reservation::Status).default("pending"))
                    .col(string(Reservation::PaymentStatus).default("not_paid"))
                    .col(text_null(Reservation::SpecialRequests))
                    .col(text_null(Reservation::CancellationReason))
                    .col(string_null(Reservation::CancelledBy))
                    .col(timestamp_null(Reservation::CancelledAt))
                    .col(timestamp_null(Reservation::ActualCheckIn))
                    .col(integer_null(Reservation::CheckedInBy))
                    .col(timestamp_null(Reservation::ActualCheckOut))
                    .col(integer_null(Reservation::CheckedOutBy))
                    .col(big_integer_null(Reservation::RefundAmountCents))
                    .col(string_null(Reservation::RefundReference))
                    .col(
                        timestamp(Reservation::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Reservation::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_user_id")
                            .from(Reservation::Table, Reservation::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_room_id")
                            .from(Reservation::Table, Reservation::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    UserId,
    RoomId,
    CheckInDate,
    CheckOutDate,
    NumAdults,
    NumChildren,
    TotalPriceCents,
    PaidAmountCents,
    DownpaymentCents,
    PaymentType,
    Status,
    PaymentStatus,
    SpecialRequests,
    CancellationReason,
    CancelledBy,
    CancelledAt,
    ActualCheckIn,
    CheckedInBy,
    ActualCheckOut,
    CheckedOutBy,
    RefundAmountCents,
    RefundReference,
    CreatedAt,
    UpdatedAt,
}
