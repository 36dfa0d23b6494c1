use blogline_core::config::NavigationStrategy;
use blogline_core::content::ContentId;
use chrono::NaiveDate;

/// Parse content ID from string
pub fn parse_content_id(s: &str) -> std::result::Result<ContentId, String> {
    s.parse::<ContentId>().map_err(|e| e.to_string())
}

/// Parse navigation strategy from string
pub fn parse_strategy(s: &str) -> std::result::Result<NavigationStrategy, String> {
    s.parse::<NavigationStrategy>().map_err(|e| e.to_string())
}

/// Parse a calendar date in YYYY-MM-DD form
pub fn parse_date(s: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("invalid date '{}': {}", s, e))
}
