//! # Taskpad
//!
//! A single-user command-line task tracker backed by SQLite.
//!
//! ## Features
//!
//! - **Task Management**: Create, update, complete, and delete tasks
//! - **Filtered Listing**: Filter by status, priority, and due-date range
//! - **Closed Enumerations**: Priority and status are fixed variant sets,
//!   enforced both in the application and by database CHECK constraints
//! - **Stable Ordering**: Listings sort by due date ascending, undated last
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskpad::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
