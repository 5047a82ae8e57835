use chrono::NaiveDate;
use datefmt_base::{format_date, FormatSelector};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_format_chinese_numeric() {
    // 2024-03-05 is a Tuesday
    let result = format_date(ymd(2024, 3, 5), FormatSelector::ChineseNumeric).unwrap();
    assert_eq!(result, "2024 年 3 月 5 日");
}

#[test]
fn test_format_chinese_long_weekday() {
    let result = format_date(ymd(2024, 3, 5), FormatSelector::ChineseLongWeekday).unwrap();
    assert_eq!(result, "2024年3月5日，星期二");
}

#[test]
fn test_format_us_short() {
    let result = format_date(ymd(2024, 3, 5), FormatSelector::UsShort).unwrap();
    assert_eq!(result, "Mar 5, 2024");
}

#[test]
fn test_format_us_short_weekday() {
    let result = format_date(ymd(2024, 3, 5), FormatSelector::UsShortWeekday).unwrap();
    assert_eq!(result, "Tue, Mar 5, 2024");
}

#[test]
fn test_format_us_long_ordinal() {
    let result = format_date(ymd(2024, 3, 5), FormatSelector::UsLongOrdinal).unwrap();
    assert_eq!(result, "March 5th, 2024");

    let result = format_date(ymd(2024, 3, 11), FormatSelector::UsLongOrdinal).unwrap();
    assert_eq!(result, "March 11th, 2024");

    let result = format_date(ymd(2024, 3, 21), FormatSelector::UsLongOrdinal).unwrap();
    assert_eq!(result, "March 21st, 2024");
}

#[test]
fn test_format_us_long_weekday() {
    let result = format_date(ymd(2024, 3, 5), FormatSelector::UsLongWeekday).unwrap();
    assert_eq!(result, "March 5, 2024 (Tuesday)");
}

#[test]
fn test_format_lunar() {
    let result = format_date(ymd(2024, 3, 5), FormatSelector::Lunar).unwrap();
    assert_eq!(result, "2024年正月二十五日(农历)");
}

#[test]
fn test_format_lunar_before_new_year() {
    // Still lunar year 2023 in early January 2024
    let result = format_date(ymd(2024, 1, 1), FormatSelector::Lunar).unwrap();
    assert_eq!(result, "2023年十一月二十日(农历)");

    let result = format_date(ymd(2024, 12, 31), FormatSelector::Lunar).unwrap();
    assert_eq!(result, "2024年腊月一日(农历)");
}

#[test]
fn test_format_lunar_leap_month() {
    let result = format_date(ymd(2023, 3, 22), FormatSelector::Lunar).unwrap();
    assert_eq!(result, "2023年闰二月一日(农历)");
}

#[test]
fn test_format_year_end_dates() {
    let date = ymd(2024, 12, 31);
    assert_eq!(
        format_date(date, FormatSelector::ChineseNumeric).unwrap(),
        "2024 年 12 月 31 日"
    );
    assert_eq!(
        format_date(date, FormatSelector::UsShortWeekday).unwrap(),
        "Tue, Dec 31, 2024"
    );
    assert_eq!(
        format_date(date, FormatSelector::UsLongOrdinal).unwrap(),
        "December 31st, 2024"
    );
}

#[test]
fn test_format_is_deterministic() {
    let date = ymd(2031, 10, 2);
    for selector in FormatSelector::ALL {
        let first = format_date(date, selector).unwrap();
        let second = format_date(date, selector).unwrap();
        assert_eq!(first, second);
    }
}
