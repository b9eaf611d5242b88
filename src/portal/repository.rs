// Repository pattern - isolates all database reads
use async_trait::async_trait;
use rusqlite::{params, params_from_iter, OptionalExtension, Row};
use std::sync::Arc;
use thiserror::Error;

use crate::db::models::{
    AttendanceRecord, AttendanceStatus, MarkRecord, PaymentRecord, PaymentStatus, Student,
};
use crate::portal::domain::{LinkedChildren, StudentId};
use crate::state::DbPool;

/// SQLite's default bound-parameter limit is well above this.
const ID_CHUNK: usize = 100;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] r2d2::Error),

    #[error("SQL error: {0}")]
    Sql(#[from] rusqlite::Error),
}

/// Read-only access to the records the administration system maintains.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Look up one student regardless of the access flag.
    async fn find_student(&self, id: &StudentId) -> Result<Option<Student>, RepositoryError>;

    /// Students from the list whose access flag is set, in link order.
    async fn accessible_students(
        &self,
        ids: &LinkedChildren,
    ) -> Result<Vec<Student>, RepositoryError>;

    /// Newest first.
    async fn attendance_for(
        &self,
        id: &StudentId,
    ) -> Result<Vec<AttendanceRecord>, RepositoryError>;

    /// Newest period first (year, then month).
    async fn payments_for(&self, id: &StudentId) -> Result<Vec<PaymentRecord>, RepositoryError>;

    /// Term name descending, then subject name ascending.
    async fn results_for(&self, id: &StudentId) -> Result<Vec<MarkRecord>, RepositoryError>;
}

pub struct SqliteStudentRepository {
    pool: DbPool,
}

impl SqliteStudentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn student_from_row(row: &Row<'_>) -> rusqlite::Result<Student> {
    Ok(Student {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        photo_url: row.get(3)?,
        parents_portal: row.get(4)?,
    })
}

#[async_trait]
impl StudentRepository for SqliteStudentRepository {
    async fn find_student(&self, id: &StudentId) -> Result<Option<Student>, RepositoryError> {
        let conn = self.pool.get()?;

        let student = conn
            .query_row(
                "SELECT id, first_name, last_name, profile_image_url, parents_portal
                 FROM students WHERE id = ?1 LIMIT 1",
                params![id.as_str()],
                student_from_row,
            )
            .optional()?;

        Ok(student)
    }

    async fn accessible_students(
        &self,
        ids: &LinkedChildren,
    ) -> Result<Vec<Student>, RepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let conn = self.pool.get()?;
        let mut students = Vec::with_capacity(ids.len());

        for chunk in ids.ids().chunks(ID_CHUNK) {
            let placeholders = vec!["?"; chunk.len()].join(", ");
            let sql = format!(
                "SELECT id, first_name, last_name, profile_image_url, parents_portal
                 FROM students
                 WHERE id IN ({}) AND parents_portal = 1",
                placeholders
            );

            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
                .query_map(params_from_iter(chunk.iter().map(|id| id.as_str())), student_from_row)?
                .collect::<Result<Vec<_>, _>>()?;
            students.extend(rows);
        }

        students.sort_by_key(|student| ids.position(&student.id).unwrap_or(usize::MAX));
        tracing::debug!(
            "Resolved {} of {} linked students",
            students.len(),
            ids.len()
        );

        Ok(students)
    }

    async fn attendance_for(
        &self,
        id: &StudentId,
    ) -> Result<Vec<AttendanceRecord>, RepositoryError> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT a.id, a.date, a.status, a.notes, c.name
             FROM attendance a
             LEFT JOIN classes c ON a.class_id = c.id
             WHERE a.student_id = ?1
             ORDER BY a.date DESC",
        )?;

        let records = stmt
            .query_map(params![id.as_str()], |row| {
                let status: String = row.get(2)?;
                Ok(AttendanceRecord {
                    id: row.get(0)?,
                    date: row.get(1)?,
                    status: AttendanceStatus::from_db(&status),
                    notes: row.get(3)?,
                    class_name: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    async fn payments_for(&self, id: &StudentId) -> Result<Vec<PaymentRecord>, RepositoryError> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT p.id, p.amount, p.month, p.year, p.status,
                    p.payment_date, p.payment_method, pt.name
             FROM payments p
             LEFT JOIN payment_types pt ON p.payment_type_id = pt.id
             WHERE p.student_id = ?1
             ORDER BY p.year DESC, p.month DESC",
        )?;

        let records = stmt
            .query_map(params![id.as_str()], |row| {
                let status: String = row.get(4)?;
                Ok(PaymentRecord {
                    id: row.get(0)?,
                    amount: row.get(1)?,
                    month: row.get(2)?,
                    year: row.get(3)?,
                    status: PaymentStatus::from_db(&status),
                    payment_date: row.get(5)?,
                    payment_method: row.get(6)?,
                    payment_type: row.get(7)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    async fn results_for(&self, id: &StudentId) -> Result<Vec<MarkRecord>, RepositoryError> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT m.id, m.score, m.max_score, m.grade, s.name, t.name, se.name
             FROM marks m
             LEFT JOIN subjects s ON m.subject_id = s.id
             LEFT JOIN terms t ON m.term_id = t.id
             LEFT JOIN sub_exams se ON m.sub_exam_id = se.id
             WHERE m.student_id = ?1
             ORDER BY t.name DESC, s.name ASC",
        )?;

        let records = stmt
            .query_map(params![id.as_str()], |row| {
                Ok(MarkRecord {
                    id: row.get(0)?,
                    score: row.get(1)?,
                    max_score: row.get(2)?,
                    grade: row.get(3)?,
                    subject_name: row.get(4)?,
                    term_name: row.get(5)?,
                    exam_name: row.get(6)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }
}

/// Type alias for Arc-wrapped repository (for AppState)
pub type DynStudentRepository = Arc<dyn StudentRepository>;
