use pretty_assertions::assert_eq;
use sqlbatch::{Record, Value};
use tests::{records, Test};

const SCHEMA: &str = "CREATE TABLE notes (id INTEGER PRIMARY KEY, body TEXT NOT NULL, pinned BOOLEAN);";

#[derive(Debug, Clone, Record)]
struct Note {
    #[key]
    id: i64,
    body: String,
    pinned: bool,
}

fn note(id: i64, body: &str) -> Note {
    Note {
        id,
        body: body.to_string(),
        pinned: false,
    }
}

async fn setup() -> Test {
    let mut builder = records!(Note);
    builder.placeholders(true);
    Test::new(builder, SCHEMA).await
}

#[tokio::test]
async fn insert_binds_values() {
    let mut test = setup().await;

    test.db
        .insert(&[note(0, "it's"), note(0, r"C:\temp")])
        .await
        .unwrap();

    let op = test.log.pop_sql();
    assert_eq!(op.sql, "INSERT INTO notes (body,pinned) VALUES (?1,?2),(?3,?4);");
    assert_eq!(
        op.params,
        [
            Value::from("it's"),
            Value::from(false),
            Value::from(r"C:\temp"),
            Value::from(false),
        ]
    );

    assert_eq!(
        test.query_strings("SELECT body FROM notes ORDER BY id"),
        ["it's", r"C:\temp"]
    );
}

#[tokio::test]
async fn update_sends_one_operation_per_record() {
    let mut test = setup().await;
    test.db
        .insert_with_key(&[note(1, "a"), note(2, "b")])
        .await
        .unwrap();
    test.log.clear();

    test.db
        .update(&[note(1, "A"), note(2, "B")])
        .await
        .unwrap();

    assert_eq!(test.log.pop_transaction(), "BEGIN");
    let first = test.log.pop_sql();
    assert_eq!(first.sql, "UPDATE notes SET `body` = ?1,`pinned` = ?2 WHERE id = ?3;");
    assert_eq!(first.params, [Value::from("A"), Value::from(false), Value::from(1_i64)]);
    assert_eq!(test.log.pop_sql().params[0], Value::from("B"));
    assert_eq!(test.log.pop_transaction(), "COMMIT");

    assert_eq!(
        test.query_strings("SELECT body FROM notes ORDER BY id"),
        ["A", "B"]
    );
}

#[tokio::test]
async fn injected_failure_rolls_back_earlier_statements() {
    let mut builder = records!(Note);
    builder.placeholders(true);
    let mut test = Test::setup(builder, SCHEMA, |driver| driver.fail_on("DELETE")).await;

    let mut batch = test.db.batch();
    batch.insert_with_key(&[note(7, "seven")]).unwrap();
    batch.delete(&[note(7, "seven")]).unwrap();

    let err = batch.commit().await.unwrap_err();
    drop(batch);

    assert_eq!(err.to_string(), "injected failure");
    assert_eq!(test.log.pop_transaction(), "BEGIN");
    assert!(test.log.pop_sql().sql.starts_with("INSERT"));
    assert!(test.log.pop_sql().sql.starts_with("DELETE"));
    assert_eq!(test.log.pop_transaction(), "ROLLBACK");
    assert_eq!(test.count("notes"), 0);
}
