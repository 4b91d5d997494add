pub mod entry;
pub mod meta;
