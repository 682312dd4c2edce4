use pretty_assertions::assert_eq;
use sqlbatch::{
    schema::{ColumnMapping, TableMapping},
    Record, Value,
};

#[derive(Debug, Clone, Record)]
struct LineItem {
    #[key]
    #[column("line_item_id")]
    id: i64,
    sku: String,
    quantity: i32,
    note: Option<String>,
    #[skip]
    cached_total: f64,
}

#[derive(Debug, Clone, Record)]
#[table = "people"]
struct Person {
    #[key]
    id: i64,
    name: String,
}

fn line_item() -> LineItem {
    LineItem {
        id: 9,
        sku: "X-1".to_string(),
        quantity: 3,
        note: None,
        cached_total: 0.0,
    }
}

#[test]
fn default_table_name_is_plural_snake_case() {
    assert_eq!(
        LineItem::mapping(),
        TableMapping::new(
            "line_items",
            vec![
                ColumnMapping::primary_key("line_item_id"),
                ColumnMapping::new("sku"),
                ColumnMapping::new("quantity"),
                ColumnMapping::new("note"),
            ]
        )
    );
}

#[test]
fn table_attribute_overrides_name() {
    assert_eq!(Person::mapping().table_name, "people");
}

#[test]
fn field_lookup_uses_column_names() {
    let item = line_item();

    assert_eq!(item.field("line_item_id"), Some(Value::I64(9)));
    assert_eq!(item.field("quantity"), Some(Value::I32(3)));
    assert_eq!(item.field("note"), Some(Value::Null));
    assert_eq!(item.field("id"), None);
    assert_eq!(item.field("cached_total"), None);
}

#[test]
fn field_lookup_is_case_sensitive() {
    assert_eq!(line_item().field("SKU"), None);
    assert_eq!(line_item().field("sku"), Some(Value::from("X-1")));
}
