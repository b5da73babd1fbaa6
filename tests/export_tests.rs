//! LookML export tests

use dbt_lookml::export::{
    ColumnClassification, ExportError, LookMLExporter, generate_explore, generate_view,
    lookml_dimension_groups, lookml_dimensions, lookml_measures,
};
use dbt_lookml::models::{
    DbtAdapter, DbtColumn, DbtModel, LookerJoin, LookerJoinRelationship, LookerJoinType,
    LookerMeasure, LookerMeasureType,
};

fn orders_model() -> DbtModel {
    DbtModel::new("model.shop.orders", "orders", "analytics", "shop")
        .with_description("One row per order")
        .with_column(
            DbtColumn::new("id")
                .with_data_type("INTEGER")
                .with_description("Order id")
                .with_measure(LookerMeasure::new(LookerMeasureType::Count)),
        )
        .with_column(
            DbtColumn::new("created_at")
                .with_data_type("TIMESTAMP")
                .with_description("When the order was placed"),
        )
        .with_column(
            DbtColumn::new("status")
                .with_data_type("STRING")
                .with_description("Order status"),
        )
}

mod view_tests {
    use super::*;

    #[test]
    fn test_orders_view_scenario() {
        let file = generate_view(&orders_model(), DbtAdapter::Bigquery).unwrap();
        assert_eq!(file.filename, "orders.view");

        let expected = "\
view: orders {
  sql_table_name: analytics.shop.orders ;;

  dimension_group: created_at {
    type: time
    sql: ${TABLE}.created_at ;;
    description: \"When the order was placed\"
    datatype: timestamp
    timeframes: [raw, time, hour, date, week, month, quarter, year]
  }

  dimension: id {
    type: number
    sql: ${TABLE}.id ;;
    description: \"Order id\"
  }

  dimension: status {
    type: string
    sql: ${TABLE}.status ;;
    description: \"Order status\"
  }

  measure: count of id {
    type: count
    sql: ${TABLE}.id ;;
    description: \"Count of Order id\"
  }
}
";
        assert_eq!(file.contents, expected);
        assert!(!file.contents.contains("filters"));
    }

    #[test]
    fn test_unsupported_columns_are_dropped() {
        let model = orders_model()
            .with_column(DbtColumn::new("location").with_data_type("POINT"))
            .with_column(DbtColumn::new("computed"));
        let file = generate_view(&model, DbtAdapter::Bigquery).unwrap();
        assert!(!file.contents.contains("location"));
        assert!(!file.contents.contains("computed"));
    }

    #[test]
    fn test_every_column_accounted_for() {
        let model = DbtModel::new("model.p.wide", "wide", "db", "sch")
            .with_column(DbtColumn::new("a").with_data_type("INTEGER"))
            .with_column(DbtColumn::new("b").with_data_type("DATE"))
            .with_column(DbtColumn::new("c").with_data_type("TIMESTAMP"))
            .with_column(DbtColumn::new("d").with_data_type("DATETIME"))
            .with_column(DbtColumn::new("e").with_data_type("BOOLEAN"))
            .with_column(DbtColumn::new("f").with_data_type("TIMESTAMPTZ"))
            .with_column(DbtColumn::new("g").with_data_type("TEXT"))
            .with_column(DbtColumn::new("h"));

        for adapter in DbtAdapter::ALL {
            let classification = ColumnClassification::of(&model, adapter);
            let dimensions = lookml_dimensions(&classification);
            let groups = lookml_dimension_groups(&classification);
            assert_eq!(
                dimensions.len() + groups.len() + classification.unsupported.len(),
                model.columns.len(),
                "{}",
                adapter
            );
        }
    }

    #[test]
    fn test_blank_column_description_matches_measure_fallback() {
        let model = DbtModel::new("model.p.stock", "stock", "db", "sch").with_column(
            DbtColumn::new("qty")
                .with_data_type("INTEGER")
                .with_description("   ")
                .with_measure(LookerMeasure::new(LookerMeasureType::Sum)),
        );
        let file = generate_view(&model, DbtAdapter::Postgres).unwrap();
        assert!(file.contents.contains("description: \"Sum of qty\""));
        assert!(!file.contents.contains("description: \"   \""));
        assert_eq!(file.contents.matches("description:").count(), 1);
    }

    #[test]
    fn test_dimension_names_follow_meta() {
        let model = DbtModel::new("model.p.users", "users", "db", "sch")
            .with_column(
                DbtColumn::new("usr_nm")
                    .with_data_type("VARCHAR")
                    .with_dimension_name("user_name"),
            )
            .with_column(DbtColumn::new("email").with_data_type("VARCHAR"));
        let dimensions = lookml_dimensions(&ColumnClassification::of(&model, DbtAdapter::Snowflake));
        let names: Vec<&str> = dimensions.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["user_name", "email"]);
        assert_eq!(dimensions[0].sql, "${TABLE}.usr_nm");
    }
}

mod measure_tests {
    use super::*;

    #[test]
    fn test_filters_rendered_with_dimension_names() {
        let model = DbtModel::new("model.shop.orders", "orders", "db", "sch")
            .with_column(
                DbtColumn::new("status_cd")
                    .with_data_type("VARCHAR")
                    .with_dimension_name("status"),
            )
            .with_column(
                DbtColumn::new("amount")
                    .with_data_type("NUMERIC")
                    .with_measure(
                        LookerMeasure::new(LookerMeasureType::Sum)
                            .with_name("shipped_revenue")
                            .with_filter([("status_cd", "shipped")])
                            .with_filter([("amount", ">0")]),
                    ),
            );

        let measures = lookml_measures(&model).unwrap();
        assert_eq!(measures[0].filters.as_ref().map(Vec::len), Some(2));

        let file = generate_view(&model, DbtAdapter::Postgres).unwrap();
        assert!(
            file.contents
                .contains("filters: [status: \"shipped\", amount: \">0\"]")
        );
        assert!(!file.contents.contains("status_cd: "));
    }

    #[test]
    fn test_dangling_filter_reference() {
        let model = DbtModel::new("model.shop.orders", "orders", "db", "sch").with_column(
            DbtColumn::new("amount").with_measure(
                LookerMeasure::new(LookerMeasureType::Average)
                    .with_filter([("refund_flag", "yes")]),
            ),
        );
        let err = generate_view(&model, DbtAdapter::Bigquery).unwrap_err();
        assert!(matches!(err, ExportError::MissingFilterColumn { .. }));
        let message = err.to_string();
        assert!(message.contains("model.shop.orders"));
        assert!(message.contains("refund_flag"));
    }
}

mod explore_tests {
    use super::*;

    #[test]
    fn test_orders_join_scenario() {
        let model = orders_model().with_join(
            "customers",
            LookerJoin::new("customer_id", "id")
                .with_type(LookerJoinType::LeftOuter)
                .with_relationship(LookerJoinRelationship::ManyToOne),
        );
        let file = generate_explore(&model, "shop");
        assert_eq!(file.filename, "orders.model");
        assert!(file.contents.contains("connection: \"shop\""));
        assert!(file.contents.contains("include: \"/views/*\""));
        assert!(file.contents.contains("explore: orders {"));
        assert!(file.contents.contains("description: \"One row per order\""));
        assert_eq!(file.contents.matches("join: ").count(), 1);
        assert!(file.contents.contains("join: customers {"));
        assert!(file.contents.contains("type: left_outer"));
        assert!(file.contents.contains("relationship: many_to_one"));
        assert!(
            file.contents
                .contains("sql_on: ${orders.customer_id} = ${customers.id} ;;")
        );
    }

    #[test]
    fn test_joins_follow_declaration_order() {
        let model = DbtModel::new("model.p.orders", "orders", "db", "sch")
            .with_join("shipments", LookerJoin::new("id", "order_id"))
            .with_join("customers", LookerJoin::new("customer_id", "id"));
        let contents = generate_explore(&model, "p").contents;
        let shipments = contents.find("join: shipments").unwrap();
        let customers = contents.find("join: customers").unwrap();
        assert!(shipments < customers);
    }
}

mod exporter_tests {
    use super::*;

    #[test]
    fn test_export_project() {
        let customers = DbtModel::new("model.shop.customers", "customers", "analytics", "shop")
            .with_column(DbtColumn::new("id").with_data_type("INT64"));
        let exporter = LookMLExporter::new(DbtAdapter::Bigquery, "shop");
        let files = exporter.export(&[orders_model(), customers]).unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.filename.as_str()).collect();
        assert_eq!(
            names,
            vec!["orders.view", "orders.model", "customers.view", "customers.model"]
        );
    }
}
