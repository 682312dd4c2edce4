use super::{Column, ErrorSet};

#[derive(Debug)]
pub(crate) struct Field {
    /// Rust identifier of the field
    pub(crate) ident: syn::Ident,

    /// Column the field maps to
    pub(crate) column: String,

    /// True if the field is the primary key
    pub(crate) key: bool,
}

impl Field {
    /// Parses a struct field. Returns `Ok(None)` for fields marked `#[skip]`.
    pub(super) fn from_ast(node: &syn::Field) -> syn::Result<Option<Field>> {
        let Some(ident) = &node.ident else {
            return Err(syn::Error::new_spanned(node, "record fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut key = false;
        let mut skip = false;
        let mut column = None;

        for attr in &node.attrs {
            if attr.path().is_ident("key") {
                if key {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[key] attribute"));
                }
                key = true;
            } else if attr.path().is_ident("skip") {
                skip = true;
            } else if attr.path().is_ident("column") {
                if column.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[column] attribute"));
                    continue;
                }
                match Column::from_ast(attr) {
                    Ok(attr) => column = Some(attr),
                    Err(err) => errs.push(err),
                }
            }
        }

        if skip && key {
            errs.push(syn::Error::new_spanned(
                node,
                "a #[key] field cannot be #[skip]ped",
            ));
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        if skip {
            return Ok(None);
        }

        let column = match column {
            Some(column) => column.name.value(),
            None => ident.to_string().trim_start_matches("r#").to_string(),
        };

        Ok(Some(Field {
            ident: ident.clone(),
            column,
            key,
        }))
    }
}
