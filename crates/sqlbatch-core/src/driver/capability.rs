/// The SQL flavor a connection speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    Mysql,
    Sqlite,
}

#[derive(Debug)]
pub struct Capability {
    pub flavor: Flavor,

    /// When true, a backslash inside a string literal starts an escape
    /// sequence and must itself be escaped.
    pub backslash_escapes: bool,

    /// The driver can execute several `;`-terminated statements sent as a
    /// single text command.
    pub multi_statement: bool,

    /// Most values a single statement may bind to placeholders.
    pub max_params: usize,
}

impl Capability {
    /// SQLite capabilities.
    pub const SQLITE: Self = Self {
        flavor: Flavor::Sqlite,
        backslash_escapes: false,
        multi_statement: true,
        max_params: 32_766,
    };

    /// MySQL capabilities.
    ///
    /// Assumes the session does not run with `NO_BACKSLASH_ESCAPES`; the MySQL
    /// driver clears that mode on every connection it opens.
    pub const MYSQL: Self = Self {
        flavor: Flavor::Mysql,
        backslash_escapes: true,
        multi_statement: false,
        max_params: 65_535,
    };
}
