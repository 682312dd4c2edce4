use super::{ErrorSet, Field, RecordAttr};

use heck::ToSnakeCase;
use std::collections::HashSet;

#[derive(Debug)]
pub(crate) struct Record {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Table the record maps to
    pub(crate) table: String,

    /// Mapped fields, in declaration order
    pub(crate) fields: Vec<Field>,
}

impl Record {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "record fields must be named",
            ));
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "record generics are not supported",
            ));
        }

        let mut attr = RecordAttr::default();
        let mut fields = vec![];
        let mut errs = ErrorSet::new();

        if let Err(err) = attr.populate_from_ast(&ast.attrs) {
            errs.push(err);
        }

        let mut columns = HashSet::new();

        for node in &node.named {
            match Field::from_ast(node) {
                Ok(Some(field)) => {
                    if !columns.insert(field.column.clone()) {
                        errs.push(syn::Error::new_spanned(
                            node,
                            format!("duplicate column `{}`", field.column),
                        ));
                    }
                    fields.push(field);
                }
                Ok(None) => {}
                Err(err) => errs.push(err),
            }
        }

        if fields.is_empty() {
            errs.push(syn::Error::new_spanned(
                &ast.ident,
                "record must map at least one field",
            ));
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        let table = match &attr.table {
            Some(table) => table.value(),
            None => default_table_name(&ast.ident),
        };

        Ok(Record {
            ident: ast.ident.clone(),
            table,
            fields,
        })
    }
}

/// `LineItem` → `line_items`
fn default_table_name(ident: &syn::Ident) -> String {
    let snake = ident.to_string().to_snake_case();

    match snake.rsplit_once('_') {
        Some((head, last)) => format!("{head}_{}", pluralizer::pluralize(last, 2, false)),
        None => pluralizer::pluralize(&snake, 2, false),
    }
}
