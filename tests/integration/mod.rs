//! Integration tests
//!
//! Full-stack tests against an in-memory database

pub mod database;
