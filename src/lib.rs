pub mod config;
pub mod contacts;
pub mod output;
pub mod scoring;
pub mod wizard;
