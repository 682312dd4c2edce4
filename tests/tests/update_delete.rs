use pretty_assertions::assert_eq;
use sqlbatch::Record;
use tests::{records, Test};

const SCHEMA: &str = "
    CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT NOT NULL, age INTEGER);
    INSERT INTO users (id, name, age) VALUES (1, 'a', 10), (2, 'b', 20), (3, 'c', 30);
";

#[derive(Debug, Clone, Record)]
struct User {
    #[key]
    id: i64,
    name: String,
    age: i32,
}

#[derive(Debug, Clone, Record)]
#[table = "users"]
struct Keyless {
    id: i64,
    name: String,
}

fn user(id: i64, name: &str, age: i32) -> User {
    User {
        id,
        name: name.to_string(),
        age,
    }
}

#[tokio::test]
async fn update_runs_one_statement_per_record_in_a_transaction() {
    let mut test = Test::new(records!(User), SCHEMA).await;

    let count = test
        .db
        .update(&[user(1, "A2", 11), user(3, "C2", 33)])
        .await
        .unwrap();

    assert_eq!(count, 2);
    assert_eq!(test.log.pop_transaction(), "BEGIN");
    assert_eq!(
        test.log.pop_sql().sql,
        "UPDATE users SET `name` = 'A2',`age` = 11 WHERE id = 1; \
         UPDATE users SET `name` = 'C2',`age` = 33 WHERE id = 3;"
    );
    assert_eq!(test.log.pop_transaction(), "COMMIT");
    assert!(test.log.is_empty());

    assert_eq!(
        test.query_strings("SELECT name FROM users ORDER BY id"),
        ["A2", "b", "C2"]
    );
}

#[tokio::test]
async fn delete_uses_one_in_list() {
    let mut test = Test::new(records!(User), SCHEMA).await;

    let count = test
        .db
        .delete(&[user(3, "c", 30), user(1, "a", 10)])
        .await
        .unwrap();

    assert_eq!(count, 2);
    assert_eq!(test.log.pop_transaction(), "BEGIN");
    assert_eq!(
        test.log.pop_sql().sql,
        "DELETE FROM users WHERE id IN ( 3,1 );"
    );
    assert_eq!(test.log.pop_transaction(), "COMMIT");

    assert_eq!(test.query_strings("SELECT name FROM users"), ["b"]);
}

#[tokio::test]
async fn missing_primary_key_fails_without_driver_calls() {
    let mut test = Test::new(records!(Keyless), SCHEMA).await;
    let rows = [Keyless {
        id: 1,
        name: "x".to_string(),
    }];

    let err = test.db.delete(&rows).await.unwrap_err();
    assert!(err.is_schema_constraint());

    let err = test.db.update(&rows).await.unwrap_err();
    assert!(err.is_schema_constraint());

    assert!(test.log.is_empty());
    assert_eq!(test.connects(), 0);
    assert_eq!(test.count("users"), 3);
}

#[tokio::test]
async fn empty_input_does_nothing() {
    let mut test = Test::new(records!(User), SCHEMA).await;

    assert_eq!(test.db.update::<User>(&[]).await.unwrap(), 0);
    assert_eq!(test.db.delete::<User>(&[]).await.unwrap(), 0);

    assert!(test.log.is_empty());
    assert_eq!(test.connects(), 0);
}

#[tokio::test]
async fn failed_update_rolls_back_and_returns_the_error() {
    let mut test = Test::new(records!(User), SCHEMA).await;

    // The trigger rejects the second row after the first has been written.
    let mut bad = user(2, "b", 20);
    bad.name = String::new();
    test.db
        .execute("CREATE TRIGGER reject_empty BEFORE UPDATE ON users WHEN NEW.name = '' BEGIN SELECT RAISE(ABORT, 'empty name'); END;")
        .await
        .unwrap();
    test.log.clear();

    let err = test
        .db
        .update(&[user(1, "changed", 1), bad])
        .await
        .unwrap_err();

    assert!(err.is_execution());
    assert!(err.to_string().contains("empty name"));
    assert!(test.log.has_rollback());
    assert!(!test.log.has_commit());

    assert_eq!(
        test.query_strings("SELECT name FROM users ORDER BY id"),
        ["a", "b", "c"]
    );

    // The handle stays usable after the rollback.
    test.db.update(&[user(1, "after", 1)]).await.unwrap();
    assert_eq!(test.query_one::<String>("SELECT name FROM users WHERE id = 1"), "after");
}

#[tokio::test]
async fn failed_rollback_drops_the_connection() {
    let schema = "
        CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT NOT NULL UNIQUE, age INTEGER);
        INSERT INTO users (id, name, age) VALUES (1, 'a', 10), (2, 'b', 20), (3, 'c', 30);
    ";
    let mut test = Test::setup(records!(User), schema, |driver| driver.fail_on("ROLLBACK")).await;

    // The second row collides with user 1 after the first has been written.
    let err = test
        .db
        .update(&[user(3, "z", 30), user(2, "a", 20)])
        .await
        .unwrap_err();

    assert!(err.is_execution());
    assert!(err.to_string().contains("UNIQUE"));
    assert!(test.log.has_rollback());
    assert!(!test.db.is_connected());
    assert_eq!(
        test.query_strings("SELECT name FROM users ORDER BY id"),
        ["a", "b", "c"]
    );

    // Closing the connection aborted the transaction, so later writes
    // commit on a fresh one.
    test.db.insert(&[user(0, "d", 40)]).await.unwrap();
    assert_eq!(test.count("users"), 4);

    test.db.update(&[user(1, "after", 1)]).await.unwrap();
    assert_eq!(test.query_one::<String>("SELECT name FROM users WHERE id = 1"), "after");
    assert_eq!(test.connects(), 2);
}

#[tokio::test]
async fn execute_in_transaction_with_nothing_to_run() {
    let mut test = Test::new(records!(User), SCHEMA).await;

    assert_eq!(test.db.execute_in_transaction(vec![]).await.unwrap(), 0);
    assert!(test.log.is_empty());
}
