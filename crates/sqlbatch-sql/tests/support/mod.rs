#![allow(dead_code)]

use sqlbatch_core::{ColumnMapping, Record, TableMapping, Value};
use sqlbatch_sql::{Inline, Serializer, Statement};

pub struct Item {
    pub id: i64,
    pub name: String,
}

impl Item {
    pub fn new(id: i64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }
}

impl Record for Item {
    fn mapping() -> TableMapping {
        TableMapping::new(
            "t",
            vec![ColumnMapping::primary_key("id"), ColumnMapping::new("name")],
        )
    }

    fn field(&self, column: &str) -> Option<Value> {
        match column {
            "id" => Some(self.id.into()),
            "name" => Some(self.name.clone().into()),
            _ => None,
        }
    }
}

pub fn abc() -> Vec<Item> {
    vec![Item::new(1, "A"), Item::new(2, "B"), Item::new(3, "C")]
}

pub fn inline(serializer: Serializer, stmt: impl Into<Statement>) -> String {
    serializer.serialize(&stmt.into(), &mut Inline)
}
