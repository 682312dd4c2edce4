use pretty_assertions::assert_eq;
use sqlbatch::Record;
use tests::{records, Test};

const SCHEMA: &str = "CREATE TABLE items (id INTEGER PRIMARY KEY, name TEXT NOT NULL, price REAL, active BOOLEAN);";

#[derive(Debug, Clone, Record)]
struct Item {
    #[key]
    id: i64,
    name: String,
    price: Option<f64>,
    active: bool,
}

fn item(id: i64, name: &str, price: f64) -> Item {
    Item {
        id,
        name: name.to_string(),
        price: Some(price),
        active: true,
    }
}

#[tokio::test]
async fn insert_skips_key_column() {
    let mut test = Test::new(records!(Item), SCHEMA).await;

    let count = test
        .db
        .insert(&[item(100, "A", 1.5), item(200, "B", 2.25)])
        .await
        .unwrap();

    assert_eq!(count, 2);
    assert_eq!(
        test.log.pop_sql().sql,
        "INSERT INTO items (name,price,active) VALUES ('A',1.5,TRUE),('B',2.25,TRUE);"
    );
    assert!(test.log.is_empty());

    // The database assigned the keys.
    assert_eq!(test.query_one::<i64>("SELECT MAX(id) FROM items"), 2);
}

#[tokio::test]
async fn insert_with_key_writes_key_column() {
    let mut test = Test::new(records!(Item), SCHEMA).await;

    test.db
        .insert_with_key(&[item(10, "A", 1.0), item(20, "B", 2.0)])
        .await
        .unwrap();

    assert_eq!(
        test.log.pop_sql().sql,
        "INSERT INTO items (id,name,price,active) VALUES (10,'A',1,TRUE),(20,'B',2,TRUE);"
    );
    assert_eq!(
        test.query_strings("SELECT id || ':' || name FROM items ORDER BY id"),
        ["10:A", "20:B"]
    );
}

#[tokio::test]
async fn insert_is_not_wrapped_in_a_transaction() {
    let mut test = Test::new(records!(Item), SCHEMA).await;

    test.db.insert(&[item(0, "A", 1.0)]).await.unwrap();

    assert_eq!(test.log.len(), 1);
    assert!(!test.log.has_commit());
}

#[tokio::test]
async fn rows_keep_input_order() {
    let mut test = Test::new(records!(Item), SCHEMA).await;
    let names = ["delta", "alpha", "charlie", "bravo"];
    let items: Vec<_> = names.iter().map(|name| item(0, name, 0.5)).collect();

    test.db.insert(&items).await.unwrap();

    assert_eq!(test.query_strings("SELECT name FROM items ORDER BY id"), names);
}

#[tokio::test]
async fn quotes_survive_the_round_trip() {
    let mut test = Test::new(records!(Item), SCHEMA).await;
    let tricky = "O'Brien'); DROP TABLE items; --";

    test.db.insert(&[item(0, tricky, 1.0)]).await.unwrap();

    assert_eq!(test.query_strings("SELECT name FROM items"), [tricky]);
    assert_eq!(test.count("items"), 1);
}

#[tokio::test]
async fn null_values() {
    let mut test = Test::new(records!(Item), SCHEMA).await;
    let mut record = item(0, "A", 1.0);
    record.price = None;

    test.db.insert(&[record]).await.unwrap();

    assert!(test.log.pop_sql().sql.contains("('A',NULL,TRUE)"));
    assert_eq!(test.count("items WHERE price IS NULL"), 1);
}

#[tokio::test]
async fn empty_input_does_nothing() {
    let mut test = Test::new(records!(Item), SCHEMA).await;

    assert_eq!(test.db.insert::<Item>(&[]).await.unwrap(), 0);
    assert_eq!(test.db.insert_with_key::<Item>(&[]).await.unwrap(), 0);

    assert!(test.log.is_empty());
    assert_eq!(test.connects(), 0);
    assert!(!test.db.is_connected());
}

#[tokio::test]
async fn unregistered_type_fails_before_connecting() {
    let mut test = Test::new(records!(), SCHEMA).await;

    let err = test.db.insert(&[item(0, "A", 1.0)]).await.unwrap_err();

    assert!(err.is_mapping_not_found());
    assert!(err.to_string().contains("Item"));
    assert_eq!(test.connects(), 0);
}

#[tokio::test]
async fn failed_insert_reports_execution_error() {
    let mut test = Test::new(records!(Item), SCHEMA).await;

    test.db.insert_with_key(&[item(1, "A", 1.0)]).await.unwrap();
    let err = test
        .db
        .insert_with_key(&[item(1, "again", 1.0)])
        .await
        .unwrap_err();

    assert!(err.is_execution());
    assert_eq!(test.count("items"), 1);
}

#[tokio::test]
async fn table_name_prefix() {
    let mut builder = records!(Item);
    builder.table_name_prefix("app_");
    let mut test = Test::new(
        builder,
        "CREATE TABLE app_items (id INTEGER PRIMARY KEY, name TEXT, price REAL, active BOOLEAN);",
    )
    .await;

    test.db.insert(&[item(0, "A", 1.0)]).await.unwrap();

    assert!(test.log.pop_sql().sql.starts_with("INSERT INTO app_items "));
    assert_eq!(test.count("app_items"), 1);
}

#[tokio::test]
async fn connection_is_reused_until_closed() {
    let mut test = Test::new(records!(Item), SCHEMA).await;

    test.db.insert(&[item(0, "A", 1.0)]).await.unwrap();
    test.db.insert(&[item(0, "B", 1.0)]).await.unwrap();
    assert_eq!(test.connects(), 1);

    test.db.close();
    assert!(!test.db.is_connected());

    test.db.insert(&[item(0, "C", 1.0)]).await.unwrap();
    assert_eq!(test.connects(), 2);
    assert_eq!(test.count("items"), 3);
}
