pub mod record_table;
pub mod search_input;
pub mod theme;
