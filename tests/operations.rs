use badma_schema::graphql::comparison::{ComparisonExp, StringComparisonExp};
use badma_schema::graphql::operation::{self, OperationError, SelectArgs, StreamArgs};
use badma_schema::graphql::order::{CursorOrdering, OrderDirection};
use badma_schema::graphql::table::{BoolExpression, HasuraSource};
use std::thread;
use badma_schema::graphql::tables::{badma_clubs, badma_games, payments_providers};
use serde_json::json;
use uuid::Uuid;

const CLUB_COLUMNS: &str = "{ id created_at user_id title updated_at }";

fn club_id() -> Uuid {
    Uuid::parse_str("6f1d1e57-2a34-4c1e-9a0b-3f2c9d8e7a11").unwrap()
}

#[test]
fn select_declares_only_supplied_arguments() {
    let filter = badma_clubs::BoolExp {
        title: Some(StringComparisonExp::ilike("%chess%")),
        ..Default::default()
    };
    let args = SelectArgs::<badma_clubs::Table>::default()
        .filter(filter)
        .limit(20)
        .order_by(badma_clubs::OrderBy {
            created_at: Some(OrderDirection::Desc),
            ..Default::default()
        });
    let op = operation::select(args).unwrap();
    let request = op.request();
    assert_eq!(
        request.query,
        format!(
            "query badma_clubs($limit: Int, $order_by: [badma_clubs_order_by!], $where: badma_clubs_bool_exp) \
             {{ badma_clubs(limit: $limit, order_by: $order_by, where: $where) {} }}",
            CLUB_COLUMNS
        )
    );
    assert_eq!(request.operation_name, "badma_clubs");
    assert_eq!(request.variables["limit"], json!(20));
    assert_eq!(request.variables["where"], json!({ "title": { "_ilike": "%chess%" } }));
    assert_eq!(request.variables["order_by"], json!([{ "created_at": "desc" }]));
}

#[test]
fn select_decodes_rows() {
    let op = operation::select(SelectArgs::<badma_clubs::Table>::default()).unwrap();
    assert_eq!(
        op.request().query,
        format!("query badma_clubs {{ badma_clubs {} }}", CLUB_COLUMNS)
    );
    let rows = op
        .decode(&json!({
            "badma_clubs": [{
                "id": club_id(),
                "created_at": 1700000000000i64,
                "user_id": Uuid::nil(),
                "title": "Knights",
                "updated_at": 1700000000001i64
            }]
        }))
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "Knights");
    assert_eq!(rows[0].id, club_id());
}

#[test]
fn combinators_nest_filters() {
    let filter = badma_clubs::BoolExp::all(vec![
        badma_clubs::BoolExp::by_id(club_id()),
        badma_clubs::BoolExp::negate(badma_clubs::BoolExp {
            created_at: Some(ComparisonExp::between(0, 10)),
            ..Default::default()
        }),
    ]);
    assert_eq!(
        serde_json::to_value(&filter).unwrap(),
        json!({
            "_and": [
                { "id": { "_eq": club_id() } },
                { "_not": { "created_at": { "_gte": 0, "_lte": 10 } } }
            ]
        })
    );
}

#[test]
fn aggregate_selects_numeric_statistics() {
    let op = operation::aggregate(SelectArgs::<badma_clubs::Table>::default()).unwrap();
    assert_eq!(op.root_field(), "badma_clubs_aggregate");
    let query = &op.request().query;
    assert!(query.contains("{ aggregate { avg { created_at updated_at } count max { created_at updated_at }"));
    assert!(query.ends_with(&format!("nodes {} }} }}", CLUB_COLUMNS)));

    let result = op
        .decode(&json!({
            "badma_clubs_aggregate": {
                "aggregate": { "count": 3, "max": { "created_at": 9, "updated_at": 12 } },
                "nodes": []
            }
        }))
        .unwrap();
    let aggregate = result.aggregate.unwrap();
    assert_eq!(aggregate.count, 3);
    assert_eq!(aggregate.max.unwrap().updated_at, Some(12));
    assert!(result.nodes.is_empty());
}

#[test]
fn by_pk_decodes_null_as_none() {
    let op = operation::by_pk::<badma_clubs::Table>(club_id()).unwrap();
    assert_eq!(
        op.request().query,
        format!(
            "query badma_clubs_by_pk($id: uuid!) {{ badma_clubs_by_pk(id: $id) {} }}",
            CLUB_COLUMNS
        )
    );
    let row = op.decode(&json!({ "badma_clubs_by_pk": null })).unwrap();
    assert!(row.is_none());
}

#[test]
fn update_binds_each_updates_member() {
    let updates = badma_clubs::Updates {
        set: Some(badma_clubs::SetInput {
            title: Some("Rooks".to_string()),
            ..Default::default()
        }),
        r#where: badma_clubs::BoolExp::by_id(club_id()),
        ..Default::default()
    };
    let op = operation::update::<badma_clubs::Table>(updates).unwrap();
    assert_eq!(
        op.request().query,
        format!(
            "mutation update_badma_clubs($_set: badma_clubs_set_input, $where: badma_clubs_bool_exp!) \
             {{ update_badma_clubs(_set: $_set, where: $where) {{ affected_rows returning {} }} }}",
            CLUB_COLUMNS
        )
    );
    assert_eq!(op.request().variables["_set"], json!({ "title": "Rooks" }));
}

#[test]
fn update_by_pk_drops_the_filter() {
    let updates = badma_clubs::Updates {
        inc: Some(badma_clubs::IncInput {
            updated_at: Some(1),
            ..Default::default()
        }),
        r#where: badma_clubs::BoolExp::by_id(Uuid::nil()),
        ..Default::default()
    };
    let op = operation::update_by_pk::<badma_clubs::Table>(club_id(), updates).unwrap();
    let request = op.request();
    assert_eq!(
        request.query,
        format!(
            "mutation update_badma_clubs_by_pk($pk_columns: badma_clubs_pk_columns_input!, $_inc: badma_clubs_inc_input) \
             {{ update_badma_clubs_by_pk(pk_columns: $pk_columns, _inc: $_inc) {} }}",
            CLUB_COLUMNS
        )
    );
    assert!(!request.variables.contains_key("where"));
    assert_eq!(request.variables["pk_columns"], json!({ "id": club_id() }));
}

#[test]
fn jsonb_update_operators_get_their_input_types() {
    let updates = payments_providers::Updates {
        append: Some(payments_providers::AppendInput {
            config: Some(json!({ "currency": "EUR" })),
        }),
        delete_key: Some(payments_providers::DeleteKeyInput {
            config: Some("legacy".to_string()),
        }),
        ..Default::default()
    };
    let op = operation::update::<payments_providers::Table>(updates).unwrap();
    let query = &op.request().query;
    assert!(query.starts_with(
        "mutation update_payments_providers($_append: payments_providers_append_input, \
         $_delete_key: payments_providers_delete_key_input, $where: payments_providers_bool_exp!)"
    ));
    assert_eq!(op.request().variables["where"], json!({}));
}

#[test]
fn update_many_wraps_every_entry() {
    let op = operation::update_many::<badma_games::Table>(vec![
        badma_games::Updates::default(),
        badma_games::Updates::default(),
    ])
    .unwrap();
    assert!(op.request().query.starts_with(
        "mutation update_badma_games_many($updates: [badma_games_updates!]!) { update_badma_games_many(updates: $updates) { affected_rows returning {"
    ));
    assert_eq!(op.request().variables["updates"].as_array().unwrap().len(), 2);
    let responses = op
        .decode(&json!({
            "update_badma_games_many": [
                { "affected_rows": 0, "returning": [] },
                null
            ]
        }))
        .unwrap();
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0].as_ref().unwrap().affected_rows, 0);
    assert!(responses[1].is_none());
}

#[test]
fn insert_and_delete_use_mutation_types() {
    let object = badma_clubs::InsertInput {
        user_id: Some(Uuid::nil()),
        title: Some("Bishops".to_string()),
        ..Default::default()
    };
    let conflict = badma_clubs::OnConflict {
        constraint: badma_clubs::Constraint::clubs_pkey,
        update_columns: vec![badma_clubs::UpdateColumn::title],
        r#where: None,
    };
    let op = operation::insert::<badma_clubs::Table>(vec![object.clone()], Some(conflict)).unwrap();
    assert!(op.request().query.starts_with(
        "mutation insert_badma_clubs($objects: [badma_clubs_insert_input!]!, $on_conflict: badma_clubs_on_conflict)"
    ));
    assert_eq!(
        op.request().variables["on_conflict"],
        json!({ "constraint": "clubs_pkey", "update_columns": ["title"] })
    );

    let op = operation::insert_one::<badma_clubs::Table>(object, None).unwrap();
    assert!(op
        .request()
        .query
        .starts_with("mutation insert_badma_clubs_one($object: badma_clubs_insert_input!) {"));

    let op = operation::delete::<badma_clubs::Table>(badma_clubs::BoolExp::by_id(club_id())).unwrap();
    assert!(op
        .request()
        .query
        .starts_with("mutation delete_badma_clubs($where: badma_clubs_bool_exp!) {"));

    let op = operation::delete_by_pk::<badma_clubs::Table>(club_id()).unwrap();
    assert_eq!(op.root_field(), "delete_badma_clubs_by_pk");
}

#[test]
fn stream_declares_cursor_and_batch_size() {
    let cursor = badma_clubs::StreamCursorInput {
        initial_value: badma_clubs::StreamCursorValueInput {
            created_at: Some(0),
            ..Default::default()
        },
        ordering: Some(CursorOrdering::Asc),
    };
    let op = operation::stream(StreamArgs::<badma_clubs::Table>::new(50, cursor)).unwrap();
    assert_eq!(
        op.request().query,
        format!(
            "subscription badma_clubs_stream($batch_size: Int!, $cursor: [badma_clubs_stream_cursor_input]!) \
             {{ badma_clubs_stream(batch_size: $batch_size, cursor: $cursor) {} }}",
            CLUB_COLUMNS
        )
    );
    assert_eq!(
        op.request().variables["cursor"],
        json!([{ "initial_value": { "created_at": 0 }, "ordering": "ASC" }])
    );
}

#[test]
fn live_queries_keep_their_arguments() {
    let op = operation::select(SelectArgs::<badma_clubs::Table>::default().limit(1))
        .unwrap()
        .live();
    assert!(op
        .request()
        .query
        .starts_with("subscription badma_clubs($limit: Int) { badma_clubs(limit: $limit)"));
}

#[test]
fn decode_errors_name_the_field() {
    let op = operation::by_pk::<badma_clubs::Table>(club_id()).unwrap();
    let err = op
        .decode(&json!({ "badma_clubs_by_pk": { "id": "not-a-uuid" } }))
        .unwrap_err();
    assert!(matches!(err, OperationError::Decode { ref field, .. } if field == "badma_clubs_by_pk"));
}

fn decode_elsewhere<T: HasuraSource>(data: serde_json::Value) -> thread::JoinHandle<Result<usize, OperationError>> {
    let op = operation::select(SelectArgs::<T>::default()).unwrap();
    thread::spawn(move || op.decode(&data).map(|rows| rows.len()))
}

#[test]
fn operations_can_move_to_other_threads() {
    let handle = decode_elsewhere::<badma_clubs::Table>(json!({ "badma_clubs": [] }));
    assert_eq!(handle.join().unwrap().unwrap(), 0);

    let op = operation::by_pk::<badma_clubs::Table>(club_id()).unwrap();
    let handle = thread::spawn(move || op.decode(&json!({ "badma_clubs_by_pk": null })));
    assert!(handle.join().unwrap().unwrap().is_none());
}
