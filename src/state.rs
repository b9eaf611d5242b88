use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use std::sync::Arc;

use crate::config::Config;
use crate::portal::repository::{DynStudentRepository, SqliteStudentRepository};

pub type DbPool = Pool<SqliteConnectionManager>;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub students: DynStudentRepository,
}

impl AppState {
    pub fn new(db: DbPool, config: Config) -> Self {
        Self {
            config,
            students: Arc::new(SqliteStudentRepository::new(db)),
        }
    }
}
