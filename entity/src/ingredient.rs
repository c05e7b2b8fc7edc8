use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ingredient")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub category: String,
    pub unit: String,
    pub seasonal: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::farmer_ingredient::Entity")]
    FarmerIngredient,
    #[sea_orm(has_many = "super::booking_ingredient::Entity")]
    BookingIngredient,
}

impl Related<super::farmer_ingredient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FarmerIngredient.def()
    }
}

impl Related<super::booking_ingredient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookingIngredient.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
