use std::time::Duration;

use chrono::NaiveDate;

/// Platform timer: browser `setTimeout` on wasm32, tokio elsewhere.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Today's date in the browser's local time zone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn format_price(amount: f64) -> String {
    format!("${:.2}", amount)
}

pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%b %-d, %Y").to_string()).unwrap_or_else(|| "N/A".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatting() {
        assert_eq!(format_price(899.0), "$899.00");
        assert_eq!(format_price(12.5), "$12.50");
        assert_eq!(format_date(None), "N/A");
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2026, 4, 10)), "Apr 10, 2026");
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2026, 4, 3)), "Apr 3, 2026");
    }
}
