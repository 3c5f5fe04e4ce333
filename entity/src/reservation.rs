use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reservation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub room_id: i32,
    pub check_in_date: NaiveDate,
    /// Strictly later than `check_in_date`; enforced before persistence.
    pub check_out_date: NaiveDate,
    pub num_adults: i32,
    pub num_children: i32,
    pub total_price_cents: i64,
    pub paid_amount_cents: i64,
    /// 30% of total, rounded half-up to the cent.
    pub downpayment_cents: i64,
    /// One of `downpayment`, `full_payment`, `cash_on_arrival`.
    pub payment_type: String,
    /// One of `pending`, `confirmed`, `checked_in`, `checked_out`,
    /// `cancelled`, `no_show`.
    pub status: String,
    /// One of `not_paid`, `partially_paid`, `fully_paid`, `refunded`,
    /// `partially_refunded`.
    pub payment_status: String,
    pub special_requests: Option<String>,
    pub cancellation_reason: Option<String>,
    /// One of `user`, `staff`, `admin` when cancelled.
    pub cancelled_by: Option<String>,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub actual_check_in: Option<DateTime<Utc>>,
    pub checked_in_by: Option<i32>,
    pub actual_check_out: Option<DateTime<Utc>>,
    pub checked_out_by: Option<i32>,
    /// Written back by the external manual-refund workflow.
    pub refund_amount_cents: Option<i64>,
    pub refund_reference: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::room::Entity",
        from = "Column::RoomId",
        to = "super::room::Column::Id"
    )]
    Room,
    #[sea_orm(has_many = "super::reservation_amenity::Entity")]
    ReservationAmenity,
    #[sea_orm(has_many = "super::payment::Entity")]
    Payment,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl Related<super::reservation_amenity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReservationAmenity.def()
    }
}

impl Related<super::payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
