use crate::error::{AppError, AppResult};
use chrono::{DateTime, NaiveDateTime, Utc};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// 解析时间: RFC 3339，或不带时区的 ISO 8601（按 UTC 处理）
pub fn parse_datetime(input: &str) -> AppResult<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| AppError::ValidationError(format!("Invalid datetime: {input}")))
}

/// 查询参数中的时间，缺省为当前时间
pub fn resolve_query_datetime(input: Option<&str>) -> AppResult<DateTime<Utc>> {
    match input {
        Some(s) if !s.trim().is_empty() => parse_datetime(s),
        _ => Ok(Utc::now()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_rfc3339() {
        let dt = parse_datetime("2024-03-01T08:00:00+08:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
        let dt = parse_datetime("2024-03-01T00:00:00Z").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_naive_as_utc() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        assert_eq!(parse_datetime("2024-03-01T12:30:00").unwrap(), expected);
        assert_eq!(parse_datetime("2024-03-01 12:30:00").unwrap(), expected);
        let with_fraction = parse_datetime("2024-03-01 12:30:00.250000").unwrap();
        assert_eq!(with_fraction.timestamp_subsec_millis(), 250);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            parse_datetime("yesterday"),
            Err(AppError::ValidationError(_))
        ));
        assert!(parse_datetime("2024-13-01T00:00:00").is_err());
    }

    #[test]
    fn test_missing_defaults_to_now() {
        let before = Utc::now();
        let resolved = resolve_query_datetime(None).unwrap();
        assert!(resolved >= before);
        assert!(resolve_query_datetime(Some("  ")).unwrap() >= before);
    }
}
