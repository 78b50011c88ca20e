pub mod storage;
pub mod style;
pub mod theme;

use chrono::DateTime;

// compact "Mar 2024" label for project card footers
pub fn updated_label(rfc3339: &str) -> String {
    match DateTime::parse_from_rfc3339(rfc3339) {
        Ok(dt) => dt.format("%b %Y").to_string(),
        Err(_) => String::from("recently"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn updated_label_formats_month_and_year() {
        assert_eq!(updated_label("2024-03-15T12:00:00Z"), "Mar 2024");
    }

    #[test]
    fn updated_label_survives_garbage() {
        assert_eq!(updated_label("not-a-date"), "recently");
    }
}
