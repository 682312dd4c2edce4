use super::{Comma, Formatter, Ident, Params, ToSql};

use crate::stmt::{Assignment, Delete, Insert, Statement, Update};

use sqlbatch_core::stmt::Value;

impl ToSql for &Statement {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &Insert {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let columns = Comma(self.columns.iter().map(Ident::Bare));
        let rows = Comma(self.rows.iter().map(|row| Row(row)));

        fmt!(f, "INSERT INTO " Ident::Bare(&self.table) " (" columns ") VALUES " rows);
    }
}

impl ToSql for &Update {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let assignments = Comma(&self.assignments);
        let key = &self.key;

        fmt!(
            f,
            "UPDATE " Ident::Bare(&self.table) " SET " assignments
            " WHERE " Ident::Bare(&self.key_column) " = " key
        );
    }
}

impl ToSql for &Delete {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let keys = Comma(&self.keys);

        fmt!(
            f,
            "DELETE FROM " Ident::Bare(&self.table)
            " WHERE " Ident::Bare(&self.key_column) " IN ( " keys " )"
        );
    }
}

impl ToSql for &Assignment {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let value = &self.value;
        fmt!(f, Ident::Quoted(&self.column) " = " value);
    }
}

/// A parenthesized VALUES tuple
struct Row<'a>(&'a [Value]);

impl ToSql for Row<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, "(" Comma(self.0) ")");
    }
}
