pub mod cli;
pub mod company;
pub mod config;
pub mod logging;
pub mod redux;
pub mod report;
pub mod script;
