use docql::output::INDEX_PROPERTY;
use pretty_assertions::assert_eq;
use tests::prelude::*;

#[tokio::test]
async fn grid_stringifies_cells() {
    let (db, _) = setup(fixture());
    let request =
        QueryRequest::new("SELECT Name, Done, Progress FROM Tasks ORDER BY _id LIMIT 3").load("Tasks");

    let grid = db.query_grid(&cx(), &request).await.unwrap();
    assert_eq!(
        grid,
        vec![
            vec!["Write docs", "1", "0.425"],
            vec!["Fix build", "0", "1"],
            vec!["Ship release", "", ""],
        ]
    );
}

#[tokio::test]
async fn json_records_from_other_doc() {
    let (db, _) = setup(fixture());
    let request =
        QueryRequest::new("SELECT Name, Age FROM People ORDER BY Age").load(format!("People@{OTHER_DOC}"));

    let json = db.query_json(&cx(), &request).await.unwrap();
    assert_eq!(
        json,
        r#"[{"Name":"Ada","Age":36},{"Name":"Grace","Age":45}]"#
    );
}

#[tokio::test]
async fn json_records_empty_result() {
    let (db, _) = setup(fixture());
    let request = QueryRequest::new("SELECT * FROM Tasks WHERE 0").load("Tasks");

    assert_eq!(db.query_json(&cx(), &request).await.unwrap(), "[]");
}

#[tokio::test]
async fn sync_table_numbers_rows() {
    let (db, _) = setup(fixture());
    let request = QueryRequest::new("SELECT Name FROM T ORDER BY _id DESC").load("Tasks => T");

    let page = db.sync_table(&cx(), &request).await.unwrap();
    assert!(page.continuation.is_none());
    assert_eq!(page.rows.len(), 5);

    let names: Vec<_> = page
        .rows
        .iter()
        .map(|row| (row[INDEX_PROPERTY].clone(), row["Name"].clone()))
        .collect();
    assert_eq!(
        names[..2],
        [
            (Value::Integer(1), Value::from("Plan Q3")),
            (Value::Integer(2), Value::from("Triage")),
        ]
    );
}

#[tokio::test]
async fn sync_schema_loads_no_rows() {
    let (db, log) = setup(fixture());
    let request = QueryRequest::new("SELECT Name, Done AS finished FROM Tasks").load("Tasks");

    let schema = db.sync_schema(&cx(), &request).await.unwrap();
    assert_eq!(schema.id_property, "$index");
    assert_eq!(schema.properties, ["Name", "finished", "$index"]);

    assert_eq!(log.table_fetches(), 1);
    assert_eq!(log.column_fetches(), 1);
    assert_eq!(log.row_fetches(), 0);
}

#[tokio::test]
async fn sync_schema_ignores_row_ceiling() {
    let (db, _) = setup_with_max_rows(fixture(), 1);
    let request = QueryRequest::new("SELECT Name FROM Tasks").load("Tasks");

    assert!(db.sync_schema(&cx(), &request).await.is_ok());
    assert!(db.sync_table(&cx(), &request).await.is_err());
}

#[tokio::test]
async fn run_dispatches_on_shape() {
    let (db, _) = setup(fixture());
    let request: QueryRequest = serde_json::from_value(json!({
        "load": ["Tasks"],
        "query": "SELECT COUNT(*) AS n FROM Tasks WHERE Done = ?",
        "values": ["0"],
    }))
    .unwrap();

    assert_eq!(
        db.run(&cx(), &request, OutputShape::Scalar).await.unwrap(),
        Output::Scalar(Value::Integer(2))
    );
    assert_eq!(
        db.run(&cx(), &request, OutputShape::Grid).await.unwrap(),
        Output::Grid(vec![vec!["2".to_string()]])
    );
    assert_eq!(
        db.run(&cx(), &request, OutputShape::Json).await.unwrap(),
        Output::Json(r#"[{"n":2}]"#.to_string())
    );
}

#[tokio::test]
async fn execute_returns_positional_and_named_rows() {
    let (db, _) = setup(fixture());
    let request = QueryRequest::new("SELECT _id, Name FROM People ORDER BY _id")
        .load(format!("People@{OTHER_DOC}"));

    let res = db.execute(&cx(), &request).await.unwrap();
    assert_eq!(res.columns(), ["_id", "Name"]);

    let first: Vec<_> = res.rows().next().unwrap().to_vec();
    assert_eq!(first, [Value::from("p-1"), Value::from("Ada")]);

    let record = res.records().nth(1).unwrap();
    assert_eq!(record["Name"], Value::from("Grace"));
}
