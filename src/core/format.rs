use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone};

const INVALID_DATE: &str = "Invalid Date";

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const OFFSET_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M:%S%.f%:z"];

/// Renders an amount as US dollars: `$1,234.50`, `-$0.99`.
///
/// Rounds to the cent, half away from zero, on the shortest decimal
/// representation of `amount`, so `1.005` becomes `$1.01`.
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return "$NaN".to_string();
    }

    let sign = if amount.is_sign_negative() { "-" } else { "" };
    if amount.is_infinite() {
        return format!("{}$∞", sign);
    }

    let (whole, cents) = round_to_cents(&amount.abs().to_string());
    format!("{}${}.{}", sign, group_thousands(&whole), cents)
}

/// Splits a plain decimal string into whole digits and a two digit cent part.
fn round_to_cents(decimal: &str) -> (String, String) {
    let (int_part, frac_part) = decimal.split_once('.').unwrap_or((decimal, ""));

    let mut digits: Vec<u8> = int_part.bytes().map(|b| b - b'0').collect();
    let mut frac = frac_part.bytes().map(|b| b - b'0');
    digits.push(frac.next().unwrap_or(0));
    digits.push(frac.next().unwrap_or(0));

    if frac.next().unwrap_or(0) >= 5 {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let text: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
    let (whole, cents) = text.split_at(text.len() - 2);
    let whole = whole.trim_start_matches('0');
    let whole = if whole.is_empty() { "0" } else { whole };
    (whole.to_string(), cents.to_string())
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Anything that names a calendar day.
pub trait CalendarDate {
    fn calendar_date(&self) -> Option<NaiveDate>;
}

impl CalendarDate for str {
    fn calendar_date(&self) -> Option<NaiveDate> {
        let text = self.trim();

        if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            return Some(date);
        }
        if let Some(date) = year_or_month(text) {
            return Some(date);
        }
        if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
            return Some(datetime.date_naive());
        }
        if let Some(date) = OFFSET_DATETIME_FORMATS
            .iter()
            .find_map(|fmt| DateTime::parse_from_str(text, fmt).ok())
        {
            return Some(date.date_naive());
        }

        let naive = text
            .strip_suffix('Z')
            .or_else(|| text.strip_suffix('z'))
            .unwrap_or(text);
        NAIVE_DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(naive, fmt).ok())
            .map(|datetime| datetime.date())
    }
}

/// `YYYY` and `YYYY-MM` name the first day of that year or month.
fn year_or_month(text: &str) -> Option<NaiveDate> {
    let is_digits = |s: &str, len: usize| s.len() == len && s.bytes().all(|b| b.is_ascii_digit());

    let (year, month) = match text.split_once('-') {
        Some((year, month)) if is_digits(year, 4) && is_digits(month, 2) => (year, month),
        None if is_digits(text, 4) => (text, "01"),
        _ => return None,
    };
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

impl CalendarDate for String {
    fn calendar_date(&self) -> Option<NaiveDate> {
        self.as_str().calendar_date()
    }
}

impl CalendarDate for NaiveDate {
    fn calendar_date(&self) -> Option<NaiveDate> {
        Some(*self)
    }
}

impl CalendarDate for NaiveDateTime {
    fn calendar_date(&self) -> Option<NaiveDate> {
        Some(self.date())
    }
}

impl<Tz: TimeZone> CalendarDate for DateTime<Tz> {
    fn calendar_date(&self) -> Option<NaiveDate> {
        Some(self.date_naive())
    }
}

impl<T: CalendarDate + ?Sized> CalendarDate for &T {
    fn calendar_date(&self) -> Option<NaiveDate> {
        (**self).calendar_date()
    }
}

/// Renders a date as `Jan 5, 2024`, or `Invalid Date` when the input
/// cannot be read as one.
pub fn format_date<D: CalendarDate>(input: D) -> String {
    match input.calendar_date() {
        Some(date) => format!("{} {}, {}", date.format("%b"), date.day(), date.year()),
        None => INVALID_DATE.to_string(),
    }
}
