use chrono::TimeZone;
use tickerlog_core::Calendar;

pub fn by_symbol(s: &str) -> Option<Calendar> {
    let next = match s {
        "AAPL" => (2024, 5, 2),
        "MSFT" => (2024, 4, 25),
        "GOOGL" => (2024, 4, 25),
        "AMZN" => (2024, 4, 30),
        "TSLA" => (2024, 4, 23),
        // Covered by the provider but nothing scheduled
        "EMPTY" => {
            return Some(Calendar {
                earnings_dates: vec![],
                ex_dividend_date: None,
                dividend_payment_date: None,
            });
        }
        _ => return None,
    };
    let (y, m, d) = next;
    Some(Calendar {
        earnings_dates: vec![chrono::Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).single()?],
        ex_dividend_date: None,
        dividend_payment_date: None,
    })
}
