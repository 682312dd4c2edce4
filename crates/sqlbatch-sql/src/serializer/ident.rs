use super::{Formatter, Params, ToSql};

/// An identifier. Column names in SET clauses are always back-tick quoted;
/// elsewhere a name is written bare unless it contains characters that need
/// quoting.
pub(super) enum Ident<S> {
    Bare(S),
    Quoted(S),
}

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        match self {
            Ident::Bare(name) if is_bare(name.as_ref()) => f.dst.push_str(name.as_ref()),
            Ident::Bare(name) | Ident::Quoted(name) => quote(name.as_ref(), f.dst),
        }
    }
}

fn is_bare(name: &str) -> bool {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '.'))
}

fn quote(name: &str, dst: &mut String) {
    dst.push('`');
    for c in name.chars() {
        if c == '`' {
            dst.push('`');
        }
        dst.push(c);
    }
    dst.push('`');
}
