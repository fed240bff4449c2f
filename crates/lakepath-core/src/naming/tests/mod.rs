
use crate::{Error, naming::*};

fn default_namer(database: &str, table: &str) -> PathNamer {
    PathNamer::new(&DescriptorConfig::default(), database, table).unwrap()
}

///
/// Descriptors
///

#[test]
fn default_config_orders_table_scenario() {
    let namer = default_namer("company_rds", "orders_2024");

    assert_eq!(
        namer.staging(),
        "S3/staging/dms/company_rds/company_rds/orders_2024"
    );
    assert_eq!(namer.bronze(), "S3/bronze/company_rds/company_rds/orders_2024");
    assert_eq!(namer.catalog_id(), "bronze.company_rds_orders2024");
}

#[test]
fn free_function_matches_namer() {
    let config = DescriptorConfig::default();
    let namer = PathNamer::new(&config, "sales", "line_items").unwrap();
    let descriptors = derive_descriptors(&config, "sales", "line_items").unwrap();

    assert_eq!(namer.descriptors(), &descriptors);
}

#[test]
fn construction_is_idempotent() {
    let a = default_namer("sales", "line_items");
    let b = default_namer("sales", "line_items");

    assert_eq!(a, b);
    assert_eq!(a.staging().as_bytes(), b.staging().as_bytes());
}

#[test]
fn custom_config_flows_into_every_descriptor() {
    let config = DescriptorConfig::try_from(DescriptorSegments {
        container: "lake".to_string(),
        staging_prefix: "raw".to_string(),
        bronze_prefix: "brz".to_string(),
        tool: "airbyte".to_string(),
        source_system: "crm".to_string(),
    })
    .unwrap();

    let namer = PathNamer::new(&config, "accounts", "user_profiles").unwrap();

    assert_eq!(namer.staging(), "lake/raw/airbyte/crm/accounts/user_profiles");
    assert_eq!(namer.bronze(), "lake/brz/crm/accounts/user_profiles");
    assert_eq!(namer.catalog_id(), "brz.accounts_userprofiles");
}

#[test]
fn database_underscores_are_kept_in_catalog_id() {
    let namer = default_namer("my_db", "t");

    assert_eq!(namer.catalog_id(), "bronze.my_db_t");
}

#[test]
fn underscore_variants_collide_on_catalog_id() {
    let a = default_namer("d", "ab_c");
    let b = default_namer("d", "a_bc");

    assert_eq!(a.catalog_id(), b.catalog_id());
    assert_ne!(a.staging(), b.staging());
}

#[test]
fn namer_serializes_flat() {
    let namer = default_namer("company_rds", "orders_2024");
    let json = serde_json::to_value(&namer).unwrap();

    assert_eq!(json["database"], "company_rds");
    assert_eq!(json["table"], "orders_2024");
    assert_eq!(json["catalog_id"], "bronze.company_rds_orders2024");
}

///
/// Validation
///

#[test]
fn rejects_empty_database() {
    let err = PathNamer::new(&DescriptorConfig::default(), "", "orders").unwrap_err();

    assert_eq!(
        err,
        Error::InvalidIdentifier(IdentifierError::Empty {
            kind: IdentifierKind::Database
        })
    );
}

#[test]
fn rejects_empty_table() {
    let err = derive_descriptors(&DescriptorConfig::default(), "db", "").unwrap_err();

    assert!(err.is_invalid_identifier());
    assert!(matches!(
        err,
        Error::InvalidIdentifier(IdentifierError::Empty {
            kind: IdentifierKind::Table
        })
    ));
}

#[test]
fn rejects_separator_in_database_and_table() {
    let err = PathRequest::try_new("a/b", "t").unwrap_err();
    assert!(matches!(
        err,
        IdentifierError::ContainsSeparator {
            kind: IdentifierKind::Database,
            ..
        }
    ));

    let err = PathRequest::try_new("db", "../etc").unwrap_err();
    assert_eq!(err.kind(), IdentifierKind::Table);
}

#[test]
fn rejects_catalog_separator_in_database_and_table() {
    let err = PathNamer::new(&DescriptorConfig::default(), "a.b", "c").unwrap_err();
    assert_eq!(
        err,
        Error::InvalidIdentifier(IdentifierError::ContainsCatalogSeparator {
            kind: IdentifierKind::Database,
            value: "a.b".to_string(),
        })
    );

    let err = PathRequest::try_new("a", "b.c").unwrap_err();
    assert!(matches!(
        err,
        IdentifierError::ContainsCatalogSeparator {
            kind: IdentifierKind::Table,
            ..
        }
    ));
    assert_eq!(err.to_string(), "table 'b.c' contains the catalog separator '.'");
}

#[test]
fn rejects_table_of_only_underscores() {
    let err = PathRequest::try_new("db", "___").unwrap_err();

    assert_eq!(
        err,
        IdentifierError::CollapsesToEmpty {
            value: "___".to_string()
        }
    );
    assert_eq!(err.kind(), IdentifierKind::Table);
}

#[test]
fn error_messages_name_the_input() {
    let err = PathRequest::try_new("a/b", "t").unwrap_err();

    assert_eq!(
        err.to_string(),
        "database 'a/b' contains the path separator '/'"
    );
}

#[test]
fn config_rejects_invalid_segments() {
    let empty_tool = DescriptorSegments {
        tool: String::new(),
        ..DescriptorSegments::default()
    };
    let err = DescriptorConfig::try_from(empty_tool).unwrap_err();
    assert_eq!(
        err,
        IdentifierError::Empty {
            kind: IdentifierKind::Tool
        }
    );

    let nested_container = DescriptorSegments {
        container: "s3://bucket".to_string(),
        ..DescriptorSegments::default()
    };
    let err = DescriptorConfig::try_from(nested_container).unwrap_err();
    assert_eq!(err.kind(), IdentifierKind::Container);

    let dotted_prefix = DescriptorSegments {
        bronze_prefix: "tier.bronze".to_string(),
        ..DescriptorSegments::default()
    };
    let err = DescriptorConfig::try_from(dotted_prefix).unwrap_err();
    assert!(matches!(
        err,
        IdentifierError::ContainsCatalogSeparator {
            kind: IdentifierKind::BronzePrefix,
            ..
        }
    ));
}

#[test]
fn default_segments_round_trip_through_config() {
    let config = DescriptorConfig::try_from(DescriptorSegments::default()).unwrap();

    assert_eq!(config, DescriptorConfig::default());
    assert_eq!(DescriptorSegments::from(&config), DescriptorSegments::default());
}

///
/// CatalogIndex
///

#[test]
fn catalog_index_reports_underscore_collision() {
    let mut index = CatalogIndex::new();

    assert!(index.insert(&default_namer("d", "ab_c")).unwrap());
    let err = index.insert(&default_namer("d", "a_bc")).unwrap_err();

    assert_eq!(err.catalog_id, "bronze.d_abc");
    assert_eq!(err.existing.table(), "ab_c");
    assert_eq!(err.incoming.table(), "a_bc");
    assert_eq!(index.len(), 1);
}

#[test]
fn catalog_index_reinsert_is_noop() {
    let mut index = CatalogIndex::new();
    let namer = default_namer("sales", "orders");

    assert!(index.insert(&namer).unwrap());
    assert!(!index.insert(&namer).unwrap());
    assert_eq!(index.len(), 1);
    assert_eq!(index.get("bronze.sales_orders"), Some(namer.request()));
}

#[test]
fn catalog_index_iterates_in_id_order() {
    let mut index = CatalogIndex::default();
    assert!(index.is_empty());

    for table in ["zeta", "alpha", "mid"] {
        index.insert(&default_namer("db", table)).unwrap();
    }

    let ids: Vec<_> = index.iter().map(|(id, _)| id).collect();
    assert_eq!(ids, ["bronze.db_alpha", "bronze.db_mid", "bronze.db_zeta"]);
}

#[test]
fn collision_converts_into_crate_error() {
    let mut index = CatalogIndex::new();
    index.insert(&default_namer("d", "x_y")).unwrap();

    let err: Error = index
        .insert(&default_namer("d", "xy"))
        .unwrap_err()
        .into();

    assert!(matches!(err, Error::CatalogCollision(_)));
    assert!(!err.is_invalid_identifier());
}
