extern crate proc_macro;

use proc_macro::TokenStream;

/// Derives `sqlbatch::Record` for a struct with named fields.
///
/// * `#[table = "name"]` on the struct overrides the table name, which
///   otherwise defaults to the plural, snake-cased type name.
/// * `#[key]` marks the primary-key field.
/// * `#[column("name")]` maps a field to a differently named column.
/// * `#[skip]` leaves a field out of the mapping.
#[proc_macro_derive(Record, attributes(key, column, skip, table))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    match sqlbatch_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
