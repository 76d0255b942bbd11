pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    db_err.is_unique_violation()
}

pub fn is_unique_violation_on_number(e: &sqlx::Error) -> bool {
    if !is_unique_violation(e) {
        return false;
    }

    matches!(
        e.as_database_error().and_then(|db| db.constraint()),
        Some("account_number_key")
    )
}
