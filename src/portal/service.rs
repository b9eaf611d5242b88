use serde_json::Value;

use crate::db::models::{ChildSummary, Student};
use crate::error::AppResult;
use crate::portal::domain::{check_access, LinkedChildren, StudentId, VerifiedStudent};
use crate::portal::repository::StudentRepository;

/// Verify a claimed student id for linking.
pub async fn verify_child(
    repo: &dyn StudentRepository,
    student_id: Option<&Value>,
) -> AppResult<VerifiedStudent> {
    let id = StudentId::from_json(student_id)?;

    let found = repo.find_student(&id).await?;
    let student = check_access(found).inspect_err(|_| {
        tracing::warn!("Verification rejected for student {}", id);
    })?;

    tracing::info!("Verified student {} for linking", id);
    Ok(VerifiedStudent::from(&student))
}

/// Summaries for a browser's linked ids. Ids that are unknown or have the
/// portal disabled are dropped without comment.
pub async fn children_summary(
    repo: &dyn StudentRepository,
    ids: Option<&Value>,
    grade: &str,
) -> AppResult<Vec<ChildSummary>> {
    let linked = LinkedChildren::from_json(ids)?;
    let students = repo.accessible_students(&linked).await?;

    Ok(students
        .iter()
        .map(|student| summarize(student, grade))
        .collect())
}

/// Re-check access for a student id taken from a URL.
pub async fn authorize(repo: &dyn StudentRepository, id: &StudentId) -> AppResult<Student> {
    let found = repo.find_student(id).await?;
    Ok(check_access(found)?)
}

fn summarize(student: &Student, grade: &str) -> ChildSummary {
    ChildSummary {
        id: student.id.clone(),
        full_name: student.full_name(),
        photo_url: student.photo_url.clone(),
        grade: grade.to_string(),
    }
}
