use askama::Template;
use axum::extract::State;
use axum::response::{IntoResponse, Redirect};
use axum::routing::get;
use axum::Router;

use crate::db::models::{path_segment, AttendanceRecord, MarkRecord, PaymentRecord, Student};
use crate::error::AppResult;
use crate::extractors::PortalStudent;
use crate::routes::home::{Chrome, Html};
use crate::state::AppState;

const TABS: [(&str, &str); 4] = [
    ("attendance", "Attendance"),
    ("homework", "Homework"),
    ("results", "Results"),
    ("payments", "Payments"),
];

pub struct Tab {
    pub href: String,
    pub label: &'static str,
    pub active: bool,
}

/// Header shared by all detail views: who the student is and the tab bar.
pub struct StudentFrame {
    pub id: String,
    pub full_name: String,
    pub initial: String,
    pub photo_url: String,
    pub grade: String,
    pub tabs: Vec<Tab>,
}

impl StudentFrame {
    fn new(student: &Student, grade: &str, active: &str) -> Self {
        let segment = path_segment(&student.id);
        let tabs = TABS
            .iter()
            .map(|(key, label)| Tab {
                href: format!("/parents/{}/{}", segment, key),
                label: *label,
                active: *key == active,
            })
            .collect();

        Self {
            id: student.id.clone(),
            full_name: student.full_name(),
            initial: student.initial(),
            photo_url: student.photo_url.clone().unwrap_or_default(),
            grade: grade.to_string(),
            tabs,
        }
    }
}

#[derive(Template)]
#[template(path = "pages/attendance.html")]
struct AttendanceTemplate {
    chrome: Chrome,
    frame: StudentFrame,
    records: Vec<AttendanceRecord>,
}

#[derive(Template)]
#[template(path = "pages/results.html")]
struct ResultsTemplate {
    chrome: Chrome,
    frame: StudentFrame,
    marks: Vec<MarkRecord>,
}

#[derive(Template)]
#[template(path = "pages/payments.html")]
struct PaymentsTemplate {
    chrome: Chrome,
    frame: StudentFrame,
    payments: Vec<PaymentRecord>,
}

#[derive(Template)]
#[template(path = "pages/homework.html")]
struct HomeworkTemplate {
    chrome: Chrome,
    frame: StudentFrame,
}

fn page_parts(state: &AppState, student: &Student, tab: &str) -> (Chrome, StudentFrame) {
    (
        Chrome::from(&state.config.portal),
        StudentFrame::new(student, &state.config.portal.default_grade, tab),
    )
}

/// GET /parents/{student_id}
async fn overview(PortalStudent { id, .. }: PortalStudent) -> Redirect {
    Redirect::to(&format!("/parents/{}/attendance", path_segment(id.as_str())))
}

/// GET /parents/{student_id}/attendance
async fn attendance(
    State(state): State<AppState>,
    PortalStudent { id, student }: PortalStudent,
) -> AppResult<impl IntoResponse> {
    let records = state.students.attendance_for(&id).await?;
    let (chrome, frame) = page_parts(&state, &student, "attendance");

    Ok(Html(AttendanceTemplate {
        chrome,
        frame,
        records,
    }))
}

/// GET /parents/{student_id}/results
async fn results(
    State(state): State<AppState>,
    PortalStudent { id, student }: PortalStudent,
) -> AppResult<impl IntoResponse> {
    let marks = state.students.results_for(&id).await?;
    let (chrome, frame) = page_parts(&state, &student, "results");

    Ok(Html(ResultsTemplate {
        chrome,
        frame,
        marks,
    }))
}

/// GET /parents/{student_id}/payments
async fn payments(
    State(state): State<AppState>,
    PortalStudent { id, student }: PortalStudent,
) -> AppResult<impl IntoResponse> {
    let payments = state.students.payments_for(&id).await?;
    let (chrome, frame) = page_parts(&state, &student, "payments");

    Ok(Html(PaymentsTemplate {
        chrome,
        frame,
        payments,
    }))
}

/// GET /parents/{student_id}/homework
// TODO: list assignments once the administration system exports a homework table.
async fn homework(
    State(state): State<AppState>,
    PortalStudent { student, .. }: PortalStudent,
) -> impl IntoResponse {
    let (chrome, frame) = page_parts(&state, &student, "homework");
    Html(HomeworkTemplate { chrome, frame })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/parents/{student_id}", get(overview))
        .route("/parents/{student_id}/attendance", get(attendance))
        .route("/parents/{student_id}/results", get(results))
        .route("/parents/{student_id}/payments", get(payments))
        .route("/parents/{student_id}/homework", get(homework))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chrome() -> Chrome {
        Chrome {
            school_name: "DIGITAL KG".into(),
            link_storage_key: "children".into(),
        }
    }

    fn jane() -> Student {
        Student {
            id: "S123".into(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            photo_url: None,
            parents_portal: true,
        }
    }

    #[test]
    fn frame_marks_only_active_tab() {
        let frame = StudentFrame::new(&jane(), "Not Assigned", "results");
        let active: Vec<&str> = frame
            .tabs
            .iter()
            .filter(|t| t.active)
            .map(|t| t.label)
            .collect();
        assert_eq!(active, vec!["Results"]);
        assert_eq!(frame.tabs[0].href, "/parents/S123/attendance");
        assert_eq!(frame.initial, "J");
    }

    #[test]
    fn tab_links_encode_unusual_ids() {
        let student = Student {
            id: "S 9#x".into(),
            ..jane()
        };
        let frame = StudentFrame::new(&student, "Not Assigned", "attendance");
        assert_eq!(frame.tabs[0].href, "/parents/S%209%23x/attendance");
        assert_eq!(frame.id, "S 9#x");
    }

    #[test]
    fn empty_detail_views_render_empty_states() {
        let attendance = AttendanceTemplate {
            chrome: chrome(),
            frame: StudentFrame::new(&jane(), "Not Assigned", "attendance"),
            records: vec![],
        }
        .render()
        .unwrap();
        assert!(attendance.contains("No attendance records found yet."));
        assert!(attendance.contains("Jane Doe"));

        let results = ResultsTemplate {
            chrome: chrome(),
            frame: StudentFrame::new(&jane(), "Not Assigned", "results"),
            marks: vec![],
        }
        .render()
        .unwrap();
        assert!(results.contains("No exam results published yet."));

        let payments = PaymentsTemplate {
            chrome: chrome(),
            frame: StudentFrame::new(&jane(), "Not Assigned", "payments"),
            payments: vec![],
        }
        .render()
        .unwrap();
        assert!(payments.contains("No payment records found yet."));

        let homework = HomeworkTemplate {
            chrome: chrome(),
            frame: StudentFrame::new(&jane(), "Not Assigned", "homework"),
        }
        .render()
        .unwrap();
        assert!(homework.contains("No homework assignments found yet."));
    }

    #[test]
    fn attendance_rows_show_status_and_notes() {
        let html = AttendanceTemplate {
            chrome: chrome(),
            frame: StudentFrame::new(&jane(), "Not Assigned", "attendance"),
            records: vec![AttendanceRecord {
                id: "a1".into(),
                date: "2024-09-03".into(),
                status: crate::db::models::AttendanceStatus::Absent,
                notes: Some("Fever".into()),
                class_name: Some("KG 1".into()),
            }],
        }
        .render()
        .unwrap();

        assert!(html.contains("Sep 3, 2024"));
        assert!(html.contains("Absent"));
        assert!(html.contains("Fever"));
        assert!(html.contains("KG 1"));
        assert!(!html.contains("No attendance records found yet."));
    }
}
