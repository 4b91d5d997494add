pub mod command_table;
pub mod log;
pub mod report;
pub mod timesheet;
