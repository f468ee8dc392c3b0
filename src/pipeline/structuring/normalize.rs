use chrono::NaiveDate;
use thiserror::Error;

/// A captured substring could not be converted to its canonical form.
/// Recovered by the extractor (field omitted); never a pipeline failure.
#[derive(Error, Debug, PartialEq)]
pub enum NormalizationError {
    #[error("unrecognized date format: '{0}'")]
    UnrecognizedDate(String),

    #[error("impossible calendar date: '{0}'")]
    InvalidDate(String),

    #[error("non-numeric amount: '{0}'")]
    NonNumericAmount(String),
}

/// Parse a raw date capture into a typed date.
/// Accepted layouts: ISO `YYYY-MM-DD` (idempotent), slash-separated US
/// order `MM/DD/YYYY`, dash-separated day-first order `DD-MM-YYYY`,
/// two-digit-year variants of both, and English month-name forms
/// ("January 15, 2024", "15 Jan 2024").
pub fn normalize_date(raw: &str) -> Result<NaiveDate, NormalizationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(NormalizationError::UnrecognizedDate(trimmed.into()));
    }

    if let Ok(d) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(d);
    }

    // Slash means US month-first, dash means day-first.
    if let Some((month, day, year)) = split_numeric(trimmed, '/') {
        return make_date(trimmed, year, month, day);
    }
    if let Some((day, month, year)) = split_numeric(trimmed, '-') {
        return make_date(trimmed, year, month, day);
    }

    if let Some((year, month, day)) = parse_month_name_parts(trimmed) {
        return make_date(trimmed, year, month, day);
    }

    Err(NormalizationError::UnrecognizedDate(trimmed.into()))
}

/// Strip currency symbols and thousands separators, parse the remainder
/// as a decimal rounded to two fractional digits. Sign passes through;
/// rejecting negatives is the validator's call.
pub fn normalize_currency(raw: &str) -> Result<f64, NormalizationError> {
    let stripped: String = raw
        .chars()
        .filter(|c| !matches!(c, '$' | '€' | '£' | ',') && !c.is_whitespace())
        .collect();

    let value: f64 = stripped
        .parse()
        .map_err(|_| NormalizationError::NonNumericAmount(raw.trim().into()))?;
    if !value.is_finite() {
        return Err(NormalizationError::NonNumericAmount(raw.trim().into()));
    }

    Ok((value * 100.0).round() / 100.0)
}

/// Trim and drop internal whitespace, preserving case. `None` when
/// nothing is left; identifiers have no failure mode.
pub fn normalize_identifier(raw: &str) -> Option<String> {
    let collapsed: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}

/// Trim and collapse internal whitespace runs to single spaces. `None`
/// when nothing is left.
pub fn normalize_text(raw: &str) -> Option<String> {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}

/// Split `a<sep>b<sep>year` where every part is numeric and the year has
/// two or four digits. Two-digit years pivot at 50: 00-49 → 2000s,
/// 50-99 → 1900s.
fn split_numeric(s: &str, sep: char) -> Option<(u32, u32, i32)> {
    let parts: Vec<&str> = s.split(sep).collect();
    if parts.len() != 3 {
        return None;
    }
    if parts
        .iter()
        .any(|p| p.is_empty() || !p.chars().all(|c| c.is_ascii_digit()))
    {
        return None;
    }
    if parts[0].len() > 2 || parts[1].len() > 2 {
        return None;
    }

    let a: u32 = parts[0].parse().ok()?;
    let b: u32 = parts[1].parse().ok()?;
    let year = parse_year(parts[2])?;
    Some((a, b, year))
}

/// Parse "January 15, 2024" / "Jan 15 2024" / "15 January 2024" into
/// (year, month, day) components.
fn parse_month_name_parts(s: &str) -> Option<(i32, u32, u32)> {
    let cleaned = s.replace(',', " ");
    let parts: Vec<&str> = cleaned.split_whitespace().collect();
    if parts.len() != 3 {
        return None;
    }

    if let Some(month) = month_number(parts[0]) {
        let day: u32 = strip_ordinal(parts[1]).parse().ok()?;
        let year = parse_year(parts[2])?;
        return Some((year, month, day));
    }
    if let Some(month) = month_number(parts[1]) {
        let day: u32 = strip_ordinal(parts[0]).parse().ok()?;
        let year = parse_year(parts[2])?;
        return Some((year, month, day));
    }
    None
}

fn parse_year(p: &str) -> Option<i32> {
    if !(p.len() == 2 || p.len() == 4) || !p.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let y: i32 = p.parse().ok()?;
    if p.len() == 2 {
        Some(if y <= 49 { 2000 + y } else { 1900 + y })
    } else {
        Some(y)
    }
}

/// Strip English ordinal suffixes ("1st", "22nd", "3rd", "15th").
fn strip_ordinal(p: &str) -> &str {
    p.trim_end_matches("st")
        .trim_end_matches("nd")
        .trim_end_matches("rd")
        .trim_end_matches("th")
}

fn month_number(name: &str) -> Option<u32> {
    let lower = name.trim_end_matches('.').to_lowercase();
    let month = match lower.as_str() {
        "january" | "jan" => 1,
        "february" | "feb" => 2,
        "march" | "mar" => 3,
        "april" | "apr" => 4,
        "may" => 5,
        "june" | "jun" => 6,
        "july" | "jul" => 7,
        "august" | "aug" => 8,
        "september" | "sept" | "sep" => 9,
        "october" | "oct" => 10,
        "november" | "nov" => 11,
        "december" | "dec" => 12,
        _ => return None,
    };
    Some(month)
}

fn make_date(raw: &str, year: i32, month: u32, day: u32) -> Result<NaiveDate, NormalizationError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| NormalizationError::InvalidDate(raw.into()))
}
