//! Core library modules for the taskpad application.
//!
//! - **Domain**: task entity, priority/status enumerations, filters, patches
//! - **Infrastructure**: configuration, data directory resolution, errors
//! - **User interface**: console messages and table rendering

pub mod config;
pub mod data_storage;
pub mod error;
pub mod messages;
pub mod task;
pub mod view;
