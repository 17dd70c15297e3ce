use chrono::NaiveDateTime;

pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const HEADER_SEPARATOR: &str = "---";

/// History written for a brand new account: audit header first, then
/// whatever notes the operator had already typed.
pub fn seed_history(created_at: NaiveDateTime, raw_balance: &str, notes: &str) -> String {
    format!(
        "Account created on {}.\nInitial Balance: {raw_balance}\n{HEADER_SEPARATOR}\n{notes}",
        created_at.format(CREATED_AT_FORMAT)
    )
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn header_precedes_operator_notes() {
        let created_at = NaiveDate::from_ymd_opt(2025, 3, 9)
            .and_then(|d| d.and_hms_opt(14, 5, 7))
            .expect("timestamp");
        assert_eq!(
            seed_history(created_at, "1500", "walk-in customer"),
            "Account created on 2025-03-09 14:05:07.\nInitial Balance: 1500\n---\nwalk-in customer"
        );
    }

    #[test]
    fn empty_notes_still_end_with_separator_line() {
        let created_at = NaiveDate::from_ymd_opt(2025, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .expect("timestamp");
        assert!(seed_history(created_at, "0", "").ends_with("---\n"));
    }
}
