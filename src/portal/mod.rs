pub mod domain;
pub mod repository;
pub mod service;

pub use domain::{LinkedChildren, PortalError, StudentId, VerifiedStudent};
pub use repository::{DynStudentRepository, SqliteStudentRepository, StudentRepository};
