use crate::schema::Record;

use proc_macro2::TokenStream;
use quote::quote;

pub(crate) fn record(record: &Record) -> TokenStream {
    let ident = &record.ident;
    let table = &record.table;

    let columns = record.fields.iter().map(|field| {
        let column = &field.column;
        if field.key {
            quote!(ColumnMapping::primary_key(#column))
        } else {
            quote!(ColumnMapping::new(#column))
        }
    });

    let arms = record.fields.iter().map(|field| {
        let column = &field.column;
        let field_ident = &field.ident;
        quote!(#column => Some(Value::from(Clone::clone(&self.#field_ident))),)
    });

    quote! {
        const _: () = {
            use sqlbatch::codegen_support::*;

            impl Record for #ident {
                fn mapping() -> TableMapping {
                    TableMapping::new(#table, vec![#(#columns,)*])
                }

                fn field(&self, column: &str) -> Option<Value> {
                    match column {
                        #(#arms)*
                        _ => None,
                    }
                }
            }
        };
    }
}
