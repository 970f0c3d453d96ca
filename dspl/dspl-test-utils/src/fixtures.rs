use dspl_core::Identifier;
use dspl_model::{
    Dataset,
    attribute::Attribute,
    concept::{Concept, ConceptProperty, ConceptTableMapping, PropertyMapping},
    info::Info,
    slice::{ConceptMapping, Slice, TableMapping},
    table::{Table, TableColumn},
    topic::Topic,
    value::DataType,
};

pub const TIME: &str = "time";
pub const GEO: &str = "geo";
pub const CENSUS: &str = "census";

/// Time concepts shared by other datasets.
pub fn time_dataset() -> Dataset {
    Dataset::builder(TIME)
        .info(Info::named("en", "Time"))
        .concept(Concept::new("year", DataType::Date).with_info(Info::named("en", "Year")))
        .concept(Concept::new("month", DataType::Date).with_info(Info::named("en", "Month")))
        .concept(Concept::new("day", DataType::Date).with_info(Info::named("en", "Day")))
        .build()
        .unwrap()
}

/// Geographic concepts: `country` extends `location` extends `entity`.
pub fn geo_dataset() -> Dataset {
    Dataset::builder(GEO)
        .info(Info::named("en", "Geography"))
        .concept(
            Concept::new("entity", DataType::String)
                .with_attribute(Attribute::new("kind", DataType::String).with_value("entity"))
                .with_default_value("unknown"),
        )
        .concept(
            Concept::new("location", DataType::String)
                .with_parent(Identifier::local("entity"))
                .with_attribute(Attribute::new("kind", DataType::String).with_value("location"))
                .with_attribute(Attribute::new("latitude", DataType::Float))
                .with_attribute(Attribute::new("longitude", DataType::Float)),
        )
        .concept(
            Concept::new("continent", DataType::String)
                .with_parent(Identifier::local("location"))
                .with_table(ConceptTableMapping::new("continents")),
        )
        .concept(
            Concept::new("country", DataType::String)
                .with_info(Info::named("en", "Country").with_name("fr", "Pays"))
                .with_parent(Identifier::local("location"))
                .with_property(ConceptProperty::to_concept(Identifier::local("continent")).parent())
                .with_table(ConceptTableMapping::new("countries")),
        )
        .table(
            Table::new("continents").with_column(TableColumn::new("continent", DataType::String)),
        )
        .table(
            Table::new("countries")
                .with_column(TableColumn::new("country", DataType::String))
                .with_column(TableColumn::new("continent", DataType::String)),
        )
        .build()
        .unwrap()
}

/// Population figures keyed by `country` (extending `geo:country`) and `time:year`.
pub fn population_dataset() -> Dataset {
    Dataset::builder(CENSUS)
        .info(Info::named("en", "World population"))
        .provider(Info::named("en", "Statistics office"))
        .attribute(Attribute::new("source", DataType::String).with_localized_value("en", "Census"))
        .topic(Topic::new("demography").with_child(Topic::new("population_totals")))
        .concept(
            Concept::new("country", DataType::String)
                .with_parent(Identifier::qualified(GEO, "country"))
                .with_table(
                    ConceptTableMapping::new("countries")
                        .with_concept_column("iso_code")
                        .with_property_mapping(PropertyMapping::new("continent", "continent_code"))
                        .with_property_mapping(PropertyMapping::new("name", "name"))
                        .with_property_mapping(PropertyMapping::localized("name", "fr", "name_fr")),
                ),
        )
        .concept(
            Concept::new("population", DataType::Integer)
                .with_info(Info::named("en", "Population"))
                .with_topic("population_totals")
                .with_attribute(Attribute::new("unit", DataType::String).with_value("persons")),
        )
        .concept(Concept::new("life_expectancy", DataType::Float).with_topic("demography"))
        .slice(
            Slice::new("population_by_country_year")
                .with_dimension(Identifier::local("country"))
                .with_dimension(Identifier::qualified(TIME, "year"))
                .with_metric(Identifier::local("population"))
                .with_metric(Identifier::local("life_expectancy"))
                .with_table(
                    TableMapping::new("population_csv").with_metric_mapping(ConceptMapping::new(
                        Identifier::local("population"),
                        "pop",
                    )),
                ),
        )
        .table(
            Table::new("countries")
                .with_column(TableColumn::new("iso_code", DataType::String))
                .with_column(TableColumn::new("continent_code", DataType::String))
                .with_column(TableColumn::new("name", DataType::String))
                .with_column(TableColumn::new("name_fr", DataType::String)),
        )
        .table(
            Table::new("population_csv")
                .with_column(TableColumn::new("country", DataType::String))
                .with_column(TableColumn::new("year", DataType::Date).with_format("yyyy"))
                .with_column(TableColumn::new("pop", DataType::Integer))
                .with_column(TableColumn::new("life_expectancy", DataType::Float)),
        )
        .build()
        .unwrap()
}
