use crate::db::migrations;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "taskpad.db";

/// Database connection handle, scoped to one CLI invocation.
///
/// Opening the connection applies any pending schema migrations, so every
/// caller sees an up-to-date schema. The file location comes from the
/// configuration when set, otherwise the platform data directory.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn new() -> Result<Db> {
        let db_file_path = match Config::read()?.db_path() {
            Some(path) => path,
            None => DataStorage::new().get_path(DB_FILE_NAME)?,
        };
        let mut conn = Connection::open(db_file_path)?;
        migrations::init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }
}
