use rusqlite::params;

use crate::state::DbPool;

/// Load a small demo school: one student with portal access, one without.
/// Safe to run repeatedly.
pub fn seed_demo(pool: &DbPool) -> anyhow::Result<()> {
    let mut conn = pool.get()?;
    let tx = conn.transaction()?;

    tx.execute_batch(
        "
        INSERT OR IGNORE INTO students (id, first_name, last_name, profile_image_url, parents_portal)
            VALUES ('S123', 'Jane', 'Doe', NULL, 1);
        INSERT OR IGNORE INTO students (id, first_name, last_name, profile_image_url, parents_portal)
            VALUES ('S124', 'John', 'Smith', NULL, 0);

        INSERT OR IGNORE INTO classes (id, name) VALUES ('class-kg1', 'KG 1 - Sunflowers');
        INSERT OR IGNORE INTO payment_types (id, name) VALUES ('pt-tuition', 'Tuition Fee');
        INSERT OR IGNORE INTO payment_types (id, name) VALUES ('pt-transport', 'Transport');
        INSERT OR IGNORE INTO subjects (id, name) VALUES ('sub-math', 'Mathematics');
        INSERT OR IGNORE INTO subjects (id, name) VALUES ('sub-eng', 'English');
        INSERT OR IGNORE INTO terms (id, name) VALUES ('term-1', 'Term 1');
        INSERT OR IGNORE INTO terms (id, name) VALUES ('term-2', 'Term 2');
        INSERT OR IGNORE INTO sub_exams (id, name) VALUES ('exam-mid', 'Mid-term');
        ",
    )?;

    let already_seeded: bool = tx.query_row(
        "SELECT COUNT(*) > 0 FROM attendance WHERE student_id = 'S123'",
        [],
        |row| row.get(0),
    )?;
    if already_seeded {
        tx.commit()?;
        return Ok(());
    }

    for (date, status, notes) in [
        ("2024-09-02", "present", None),
        ("2024-09-03", "absent", Some("Fever")),
        ("2024-09-04", "late", Some("Arrived 9:20")),
    ] {
        tx.execute(
            "INSERT INTO attendance (id, student_id, class_id, date, status, notes)
             VALUES (?1, 'S123', 'class-kg1', ?2, ?3, ?4)",
            params![uuid::Uuid::now_v7().to_string(), date, status, notes],
        )?;
    }

    for (type_id, amount, month, year, status, date, method) in [
        ("pt-tuition", 150.0, 9, 2024, "confirmed", Some("2024-09-01"), Some("Bank transfer")),
        ("pt-transport", 40.0, 9, 2024, "pending", None, None),
        ("pt-tuition", 150.0, 8, 2024, "confirmed", Some("2024-08-02"), Some("Cash")),
    ] {
        tx.execute(
            "INSERT INTO payments (id, student_id, payment_type_id, amount, month, year, status, payment_date, payment_method)
             VALUES (?1, 'S123', ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                uuid::Uuid::now_v7().to_string(),
                type_id,
                amount,
                month,
                year,
                status,
                date,
                method
            ],
        )?;
    }

    for (subject, term, score, grade) in [
        ("sub-math", "term-1", 42.0, Some("A")),
        ("sub-eng", "term-1", 35.5, Some("B")),
        ("sub-math", "term-2", 38.0, None),
    ] {
        tx.execute(
            "INSERT INTO marks (id, student_id, subject_id, term_id, sub_exam_id, score, max_score, grade)
             VALUES (?1, 'S123', ?2, ?3, 'exam-mid', ?4, 50.0, ?5)",
            params![uuid::Uuid::now_v7().to_string(), subject, term, score, grade],
        )?;
    }

    tx.commit()?;
    tracing::info!("Demo data loaded");
    Ok(())
}
