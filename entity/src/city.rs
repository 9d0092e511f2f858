use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "city")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country_id: i32,
    pub active: bool,
    pub batch_group: Option<i32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::country::Entity",
        from = "Column::CountryId",
        to = "super::country::Column::Id"
    )]
    Country,
    #[sea_orm(has_many = "super::city_alias::Entity")]
    CityAlias,
    #[sea_orm(has_one = "super::weather_snapshot::Entity")]
    WeatherSnapshot,
}

impl Related<super::country::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Country.def()
    }
}

impl Related<super::city_alias::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CityAlias.def()
    }
}

impl Related<super::weather_snapshot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WeatherSnapshot.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
