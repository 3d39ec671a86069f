//! Database layer for the taskpad application.
//!
//! A thin persistence layer built on SQLite: connection bootstrap, a
//! versioned migration system, and the task data-access module. Constraint
//! enforcement (enum CHECKs, primary-key uniqueness) lives in the schema
//! itself, so the storage layer rejects invalid data even when application
//! validation is bypassed.

/// Core database connection and initialization module.
pub mod db;

/// Database schema migration system.
pub mod migrations;

/// Task CRUD operations.
pub mod tasks;
