pub mod config;
pub mod logging;

pub mod classify;
pub mod duplicates;
pub mod error;
pub mod page;
pub mod redirect;
pub mod report;
pub mod sheet;
pub mod summary;
