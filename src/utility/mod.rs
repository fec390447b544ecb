pub mod filter;
pub mod helper;
pub mod report;
