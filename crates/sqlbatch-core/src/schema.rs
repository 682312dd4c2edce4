mod column;
pub use column::ColumnMapping;

mod mappings;
pub use mappings::Mappings;

mod provider;
pub use provider::{MappingProvider, RecordType};

mod table;
pub use table::{verify_identifier, TableMapping, MAX_IDENTIFIER_LEN};
