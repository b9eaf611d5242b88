use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use url::Url;

/// Fallback label for payments recorded without a payment type.
pub const DEFAULT_PAYMENT_TYPE: &str = "Tuition Fee";

/// Throwaway base used only to borrow `url`'s path-segment encoding.
const SEGMENT_BASE: &str = "http://portal.local/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub photo_url: Option<String>,
    pub parents_portal: bool,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    /// Single uppercase letter used when there is no profile photo.
    pub fn initial(&self) -> String {
        self.full_name()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "S".to_string())
    }
}

/// Card data for the linked children grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildSummary {
    pub id: String,
    pub full_name: String,
    pub photo_url: Option<String>,
    pub grade: String,
}

impl ChildSummary {
    /// Up to two initials, e.g. "Jane Doe" -> "JD".
    pub fn initials(&self) -> String {
        let initials: String = self
            .full_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(|c| c.to_uppercase())
            .take(2)
            .collect();
        if initials.is_empty() {
            "S".to_string()
        } else {
            initials
        }
    }

    pub fn photo(&self) -> &str {
        self.photo_url.as_deref().unwrap_or("")
    }

    /// The id as it appears in `/parents/{id}` links.
    pub fn path_segment(&self) -> String {
        path_segment(&self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Other(String),
}

impl AttendanceStatus {
    pub fn from_db(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "present" => Self::Present,
            "absent" => Self::Absent,
            _ => Self::Other(raw.trim().to_string()),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Present => "Present".to_string(),
            Self::Absent => "Absent".to_string(),
            Self::Other(raw) => capitalize(raw),
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Present => "badge badge-success",
            Self::Absent => "badge badge-danger",
            Self::Other(_) => "badge badge-muted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: String,
    pub date: String,
    pub status: AttendanceStatus,
    pub notes: Option<String>,
    pub class_name: Option<String>,
}

impl AttendanceRecord {
    pub fn display_date(&self) -> String {
        display_date(&self.date)
    }

    pub fn display_class(&self) -> &str {
        self.class_name.as_deref().unwrap_or("-")
    }

    pub fn display_notes(&self) -> &str {
        match self.notes.as_deref() {
            Some(notes) if !notes.trim().is_empty() => notes,
            _ => "-",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Confirmed,
    Other(String),
}

impl PaymentStatus {
    pub fn from_db(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("confirmed") {
            Self::Confirmed
        } else {
            Self::Other(raw.trim().to_string())
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Confirmed => "Confirmed".to_string(),
            Self::Other(raw) => capitalize(raw),
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Confirmed => "badge badge-success",
            Self::Other(_) => "badge badge-muted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: String,
    pub amount: f64,
    pub month: u32,
    pub year: i32,
    pub status: PaymentStatus,
    pub payment_date: Option<String>,
    pub payment_method: Option<String>,
    pub payment_type: Option<String>,
}

impl PaymentRecord {
    pub fn period(&self) -> String {
        let month = u8::try_from(self.month)
            .ok()
            .and_then(|m| chrono::Month::try_from(m).ok())
            .map(|m| m.name().to_string())
            .unwrap_or_else(|| self.month.to_string());
        format!("{} {}", month, self.year)
    }

    pub fn display_amount(&self) -> String {
        format!("${:.2}", self.amount)
    }

    pub fn display_type(&self) -> &str {
        self.payment_type.as_deref().unwrap_or(DEFAULT_PAYMENT_TYPE)
    }

    pub fn display_date(&self) -> String {
        self.payment_date
            .as_deref()
            .map(display_date)
            .unwrap_or_else(|| "-".to_string())
    }

    pub fn display_method(&self) -> &str {
        self.payment_method.as_deref().unwrap_or("-")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkRecord {
    pub id: String,
    pub score: f64,
    pub max_score: f64,
    pub grade: Option<String>,
    pub subject_name: Option<String>,
    pub term_name: Option<String>,
    pub exam_name: Option<String>,
}

impl MarkRecord {
    pub fn display_score(&self) -> String {
        format!("{} / {}", trim_number(self.score), trim_number(self.max_score))
    }

    pub fn display_grade(&self) -> &str {
        self.grade.as_deref().unwrap_or("N/A")
    }

    pub fn display_subject(&self) -> &str {
        self.subject_name.as_deref().unwrap_or("-")
    }

    pub fn display_term(&self) -> &str {
        self.term_name.as_deref().unwrap_or("-")
    }

    pub fn display_exam(&self) -> &str {
        self.exam_name.as_deref().unwrap_or("-")
    }
}

/// Dates are stored as ISO text; anything unparseable is shown verbatim.
/// Percent-encodes a student id so it survives as a single URL path segment.
pub fn path_segment(id: &str) -> String {
    let Ok(mut url) = Url::parse(SEGMENT_BASE) else {
        return id.to_string();
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.clear().push(id);
    }
    url.path().trim_start_matches('/').to_string()
}

fn display_date(raw: &str) -> String {
    let day = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => "-".to_string(),
    }
}

fn trim_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(first: &str, last: &str) -> Student {
        Student {
            id: "S1".into(),
            first_name: first.into(),
            last_name: last.into(),
            photo_url: None,
            parents_portal: true,
        }
    }

    #[test]
    fn path_segment_encodes_reserved_characters() {
        assert_eq!(path_segment("S123"), "S123");
        assert_eq!(path_segment("S 9#x"), "S%209%23x");
        assert_eq!(path_segment("a/b?c"), "a%2Fb%3Fc");
        assert_eq!(path_segment("100%"), "100%25");
    }

    #[test]
    fn full_name_joins_first_and_last() {
        assert_eq!(student("Jane", "Doe").full_name(), "Jane Doe");
        assert_eq!(student(" Jane ", "Doe ").full_name(), "Jane Doe");
    }

    #[test]
    fn initial_falls_back_for_blank_names() {
        assert_eq!(student("jane", "doe").initial(), "J");
        assert_eq!(student("", "").initial(), "S");
    }

    #[test]
    fn summary_initials_take_two_words() {
        let summary = ChildSummary {
            id: "S1".into(),
            full_name: "mary anne smith".into(),
            photo_url: None,
            grade: "Not Assigned".into(),
        };
        assert_eq!(summary.initials(), "MA");
        assert_eq!(summary.photo(), "");
    }

    #[test]
    fn attendance_status_is_case_insensitive() {
        assert_eq!(AttendanceStatus::from_db("PRESENT"), AttendanceStatus::Present);
        assert_eq!(AttendanceStatus::from_db("absent"), AttendanceStatus::Absent);
        assert_eq!(
            AttendanceStatus::from_db("late"),
            AttendanceStatus::Other("late".into())
        );
        assert_eq!(AttendanceStatus::from_db("late").label(), "Late");
    }

    #[test]
    fn payment_period_uses_month_name() {
        let payment = PaymentRecord {
            id: "p".into(),
            amount: 120.5,
            month: 3,
            year: 2024,
            status: PaymentStatus::from_db("confirmed"),
            payment_date: Some("2024-03-05".into()),
            payment_method: None,
            payment_type: None,
        };
        assert_eq!(payment.period(), "March 2024");
        assert_eq!(payment.display_amount(), "$120.50");
        assert_eq!(payment.display_type(), DEFAULT_PAYMENT_TYPE);
        assert_eq!(payment.display_date(), "Mar 5, 2024");
        assert_eq!(payment.display_method(), "-");
        assert_eq!(payment.status, PaymentStatus::Confirmed);
    }

    #[test]
    fn unparseable_dates_are_shown_verbatim() {
        assert_eq!(display_date("someday"), "someday");
        assert_eq!(display_date("2024-01-09T08:00:00Z"), "Jan 9, 2024");
    }

    #[test]
    fn mark_score_drops_trailing_zero_fraction() {
        let mark = MarkRecord {
            id: "m".into(),
            score: 45.0,
            max_score: 50.0,
            grade: None,
            subject_name: Some("Math".into()),
            term_name: None,
            exam_name: None,
        };
        assert_eq!(mark.display_score(), "45 / 50");
        assert_eq!(mark.display_grade(), "N/A");
        assert_eq!(mark.display_term(), "-");
    }
}
