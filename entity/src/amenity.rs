use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "amenity")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Unit price in integer cents.
    pub price_cents: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::reservation_amenity::Entity")]
    ReservationAmenity,
}

impl Related<super::reservation_amenity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReservationAmenity.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
