use super::{Formatter, Params, ToSql};

use sqlbatch_core::stmt::Value;

impl ToSql for &Value {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        if let Some(placeholder) = f.params.push(self) {
            return placeholder.to_sql(f);
        }

        match self {
            Value::Null => f.dst.push_str("NULL"),
            Value::Bool(true) => f.dst.push_str("TRUE"),
            Value::Bool(false) => f.dst.push_str("FALSE"),
            Value::I32(v) => f.dst.push_str(&v.to_string()),
            Value::I64(v) => f.dst.push_str(&v.to_string()),
            Value::F64(v) => f.dst.push_str(&v.to_string()),
            Value::String(v) => quote_str(v, f.serializer.backslash_escapes, f.dst),
            Value::DateTime(v) => {
                let text = v.format("%Y-%m-%d %H:%M:%S%.f").to_string();
                quote_str(&text, f.serializer.backslash_escapes, f.dst)
            }
        }
    }
}

/// Writes `value` as a single-quoted literal. Embedded quotes are doubled;
/// backslashes are doubled too when the dialect treats them as escapes.
fn quote_str(value: &str, backslash_escapes: bool, dst: &mut String) {
    dst.push('\'');
    for c in value.chars() {
        match c {
            '\'' => dst.push_str("''"),
            '\\' if backslash_escapes => dst.push_str("\\\\"),
            c => dst.push(c),
        }
    }
    dst.push('\'');
}
