use pretty_assertions::assert_eq;
use tests::prelude::*;

async fn scalar(request: QueryRequest) -> Value {
    let (db, _) = setup(fixture());
    db.query_scalar(&cx(), &request).await.unwrap()
}

#[tokio::test]
async fn count_rows() {
    let value = scalar(QueryRequest::new("SELECT COUNT(*) FROM Tasks").load("Tasks")).await;
    assert_eq!(value, Value::Integer(5));
}

#[tokio::test]
async fn empty_result_is_null() {
    let value = scalar(
        QueryRequest::new("SELECT Name FROM Tasks WHERE Name = 'nobody'").load("Tasks"),
    )
    .await;
    assert_eq!(value, Value::Null);
}

#[tokio::test]
async fn percent_is_stored_as_fraction() {
    let value = scalar(
        QueryRequest::new("SELECT Progress FROM Tasks WHERE _id = 'i-1'").load("Tasks"),
    )
    .await;
    assert_eq!(value, Value::Real(0.425));
}

#[tokio::test]
async fn currency_is_numeric() {
    let value = scalar(QueryRequest::new("SELECT SUM(Budget) FROM Tasks").load("Tasks")).await;
    assert_eq!(value.as_f64(), Some(1280.5));
}

#[tokio::test]
async fn checkbox_is_zero_one_or_null() {
    let checked = scalar(QueryRequest::new("SELECT SUM(Done) FROM Tasks").load("Tasks")).await;
    assert_eq!(checked, Value::Integer(2));

    let unknown = scalar(
        QueryRequest::new("SELECT COUNT(*) FROM Tasks WHERE Done IS NULL").load("Tasks"),
    )
    .await;
    assert_eq!(unknown, Value::Integer(1));
}

#[tokio::test]
async fn missing_cells_are_null() {
    let value = scalar(
        QueryRequest::new("SELECT COUNT(*) FROM Tasks WHERE Progress IS NULL AND Owner IS NULL")
            .load("Tasks"),
    )
    .await;
    // Only `Plan Q3` has neither cell
    assert_eq!(value, Value::Integer(1));
}

#[tokio::test]
async fn bound_values_are_text() {
    let value = scalar(
        QueryRequest::new("SELECT Name FROM Tasks WHERE Owner = ?")
            .load("Tasks")
            .value("Grace"),
    )
    .await;
    assert_eq!(value, Value::from("Fix build"));

    // Numeric columns still compare numerically against text values
    let value = scalar(
        QueryRequest::new("SELECT COUNT(*) FROM Tasks WHERE Done = ?")
            .load("Tasks")
            .value("1"),
    )
    .await;
    assert_eq!(value, Value::Integer(2));
}

#[tokio::test]
async fn numbered_placeholders() {
    let value = scalar(QueryRequest::new("SELECT ?2 || ?1").value("a").value("b")).await;
    assert_eq!(value, Value::from("ba"));
}

#[tokio::test]
async fn query_without_tables() {
    let (db, log) = setup(fixture());
    let value = db
        .query_scalar(&cx(), &QueryRequest::new("SELECT 40 + 2"))
        .await
        .unwrap();

    assert_eq!(value, Value::Integer(42));
    assert!(log.is_empty());
}

#[tokio::test]
async fn display_column_holds_row_name() {
    let value = scalar(
        QueryRequest::new("SELECT _display FROM Tasks WHERE _id = 'i-4'").load("Tasks"),
    )
    .await;
    assert_eq!(value, Value::from("Triage"));
}
