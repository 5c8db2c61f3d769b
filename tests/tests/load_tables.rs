use docql::TableRef;
use pretty_assertions::assert_eq;
use tests::prelude::*;

fn column(grid: &[Vec<String>], index: usize) -> Vec<&str> {
    grid.iter().map(|row| row[index].as_str()).collect()
}

#[tokio::test]
async fn join_across_docs() {
    let (db, log) = setup(fixture());
    let request = QueryRequest::new(
        "SELECT T.Name FROM Tasks T JOIN P ON T.Owner = P.Name WHERE P.Team = ? ORDER BY T._id",
    )
    .load("Tasks")
    .load(format!("People @ {OTHER_DOC} => P"))
    .value("Platform");

    let grid = db.query_grid(&cx(), &request).await.unwrap();
    assert_eq!(column(&grid, 0), ["Write docs"]);

    assert_eq!(log.table_fetches(), 2);
    assert_eq!(log.column_fetches(), 2);
    assert_eq!(log.row_fetches(), 2);
    assert_eq!(log.rich_row_fetches(), 0);
}

#[tokio::test]
async fn tables_are_fetched_from_their_docs() {
    let (db, log) = setup(fixture());
    let request = QueryRequest::new("SELECT 1")
        .load("Tasks")
        .load(format!("People@{OTHER_DOC}"));

    db.query_scalar(&cx(), &request).await.unwrap();

    let tasks = TableRef {
        doc: DOC.to_string(),
        table: "Tasks".to_string(),
    };
    let people = TableRef {
        doc: OTHER_DOC.to_string(),
        table: "People".to_string(),
    };

    let ops = log.ops();
    assert!(ops.contains(&FetchOp::Table(tasks.clone())));
    assert!(ops.contains(&FetchOp::Table(people.clone())));
    assert!(ops.contains(&FetchOp::Rows(tasks, ValueFormat::Simple)));
    assert!(ops.contains(&FetchOp::Rows(people, ValueFormat::Simple)));
}

#[tokio::test]
async fn load_by_table_url() {
    let (db, log) = setup(fixture());
    let request = QueryRequest::new("SELECT COUNT(*) FROM T")
        .load("https://coda.io/d/Roadmap_ddoc-main/Tasks_su1#Tasks_tutasks => T");

    let value = db.query_scalar(&cx(), &request).await.unwrap();
    assert_eq!(value, Value::Integer(5));

    let table = TableRef {
        doc: DOC.to_string(),
        table: "grid-tasks".to_string(),
    };
    assert_eq!(log.ops()[0], FetchOp::Table(table));
}

#[tokio::test]
async fn url_doc_overrides_invoking_doc() {
    let (db, _) = setup(fixture());
    let request = QueryRequest::new("SELECT COUNT(*) FROM People")
        .load("https://coda.io/d/Team_ddoc-people/People_su2#People_tupeople");

    // Invoked from an unrelated doc
    let value = db
        .query_scalar(&RequestContext::new("doc-elsewhere"), &request)
        .await
        .unwrap();
    assert_eq!(value, Value::Integer(2));
}

#[tokio::test]
async fn destination_renames_table() {
    let (db, _) = setup(fixture());

    let request = QueryRequest::new("SELECT COUNT(*) FROM Work").load("Tasks=>Work");
    assert_eq!(
        db.query_scalar(&cx(), &request).await.unwrap(),
        Value::Integer(5)
    );

    // The remote name is not defined once renamed
    let request = QueryRequest::new("SELECT COUNT(*) FROM Tasks").load("Tasks=>Work");
    let err = db.query_scalar(&cx(), &request).await.unwrap_err();
    assert!(err.is_query_syntax(), "{err}");
}

#[tokio::test]
async fn lookups_load_display_strings_by_default() {
    let (db, _) = setup(fixture());
    let request = QueryRequest::new("SELECT Owner FROM Tasks ORDER BY _id").load("Tasks");

    let grid = db.query_grid(&cx(), &request).await.unwrap();
    assert_eq!(column(&grid, 0), ["Ada", "Grace", "Ada,Grace", "", ""]);
}

#[tokio::test]
async fn lookups_load_row_ids() {
    let (db, log) = setup(fixture());
    let request = QueryRequest::new("SELECT Owner, Owner IS NULL FROM Tasks ORDER BY _id")
        .load("Tasks")
        .use_row_ids(true);

    let grid = db.query_grid(&cx(), &request).await.unwrap();
    assert_eq!(column(&grid, 0), ["p-1", "p-2", "p-1,p-2", "", ""]);
    // Rows without a reference hold NULL rather than an empty string
    assert_eq!(column(&grid, 1), ["0", "0", "0", "1", "1"]);

    assert_eq!(log.row_fetches(), 2);
    assert_eq!(log.rich_row_fetches(), 1);
}

#[tokio::test]
async fn row_ids_join_lookup_to_referenced_table() {
    let (db, _) = setup(fixture());
    let request = QueryRequest::new(
        "SELECT T.Name, P.Team FROM Tasks T JOIN P ON P._id = T.Owner ORDER BY T._id",
    )
    .load("Tasks")
    .load(format!("People@{OTHER_DOC}=>P"))
    .use_row_ids(true);

    let json = db.query_json(&cx(), &request).await.unwrap();
    assert_eq!(
        json,
        r#"[{"Name":"Write docs","Team":"Platform"},{"Name":"Fix build","Team":"Compilers"}]"#
    );
}

#[tokio::test]
async fn non_lookup_columns_ignore_row_ids() {
    let (db, _) = setup(fixture());
    let request = QueryRequest::new("SELECT Progress FROM Tasks WHERE _id = 'i-1'")
        .load("Tasks")
        .use_row_ids(true);

    assert_eq!(
        db.query_scalar(&cx(), &request).await.unwrap(),
        Value::Real(0.425)
    );
}

#[tokio::test]
async fn requests_do_not_share_tables() {
    let (db, _) = setup(fixture());

    db.query_scalar(&cx(), &QueryRequest::new("SELECT 1").load("Tasks"))
        .await
        .unwrap();

    // Nothing from the previous request is visible
    let err = db
        .query_scalar(&cx(), &QueryRequest::new("SELECT COUNT(*) FROM Tasks"))
        .await
        .unwrap_err();
    assert!(err.is_query_syntax(), "{err}");
}

#[tokio::test]
async fn concurrent_requests() {
    let (db, _) = setup(fixture());

    let requests = (0..8).map(|i| {
        let db = db.clone();
        tokio::spawn(async move {
            let request = QueryRequest::new("SELECT COUNT(*) + ? FROM Tasks")
                .load("Tasks")
                .value(i.to_string());
            db.query_scalar(&cx(), &request).await
        })
    });

    for (i, handle) in requests.collect::<Vec<_>>().into_iter().enumerate() {
        let value = handle.await.unwrap().unwrap();
        assert_eq!(value, Value::Integer(5 + i as i64));
    }
}
