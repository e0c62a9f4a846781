//! Integration test modules

mod config;
mod fetch;
mod page_flow;
