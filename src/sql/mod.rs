//! SQL text for the items table and row-to-JSON conversion.

mod row;
mod statements;
pub use row::row_to_json;
pub use statements::*;
