pub mod initialize;
pub mod log;
pub mod meta;
pub mod pool;
pub mod queries;
