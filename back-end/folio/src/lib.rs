pub mod bootstrap;
pub mod cli;
pub mod modules;
pub mod runner;
pub mod utils;
