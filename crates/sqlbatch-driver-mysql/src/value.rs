use chrono::{Datelike, Timelike};
use mysql_async::prelude::ToValue;
use sqlbatch_core::stmt::Value as CoreValue;

#[derive(Debug)]
pub struct Value<'a>(&'a CoreValue);

impl<'a> From<&'a CoreValue> for Value<'a> {
    fn from(value: &'a CoreValue) -> Self {
        Self(value)
    }
}

impl ToValue for Value<'_> {
    fn to_value(&self) -> mysql_async::Value {
        match self.0 {
            CoreValue::Bool(value) => value.to_value(),
            CoreValue::I32(value) => value.to_value(),
            CoreValue::I64(value) => value.to_value(),
            CoreValue::F64(value) => value.to_value(),
            CoreValue::String(value) => value.to_value(),
            CoreValue::DateTime(value) => mysql_async::Value::Date(
                value.year() as u16,
                value.month() as u8,
                value.day() as u8,
                value.hour() as u8,
                value.minute() as u8,
                value.second() as u8,
                value.nanosecond() / 1_000,
            ),
            CoreValue::Null => mysql_async::Value::NULL,
        }
    }
}
