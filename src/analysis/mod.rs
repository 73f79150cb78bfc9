pub mod filter;
pub mod queries;
pub mod report;
pub mod tally;
