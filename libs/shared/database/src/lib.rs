pub mod table;

pub use table::{Record, Table, TableError};
