use chrono::NaiveDate;
use datefmt_base::lunar::{gregorian_to_lunar, LunarDate};
use datefmt_base::FormatError;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn lunar(y: i32, m: u32, d: u32) -> LunarDate {
    gregorian_to_lunar(ymd(y, m, d)).unwrap()
}

#[test]
fn test_new_year_dates() {
    for &(y, m, d) in &[
        (1949, 1, 29),
        (1980, 2, 16),
        (1990, 1, 27),
        (2000, 2, 5),
        (2001, 1, 24),
        (2010, 2, 14),
        (2020, 1, 25),
        (2021, 2, 12),
        (2022, 2, 1),
        (2023, 1, 22),
        (2024, 2, 10),
        (2025, 1, 29),
        (2026, 2, 17),
    ] {
        let new_year = lunar(y, m, d);
        assert_eq!(
            (new_year.year, new_year.month, new_year.day, new_year.is_leap_month),
            (y, 1, 1, false),
            "New Year failed for {}-{}-{}",
            y,
            m,
            d
        );

        let eve = gregorian_to_lunar(ymd(y, m, d).pred_opt().unwrap()).unwrap();
        assert_eq!((eve.year, eve.month), (y - 1, 12));
        assert!(eve.day == 29 || eve.day == 30);
    }
}

#[test]
fn test_leap_months() {
    // 2020 repeated the fourth month, 2023 the second
    let date = lunar(2020, 5, 23);
    assert_eq!((date.month, date.day, date.is_leap_month), (4, 1, true));

    let date = lunar(2023, 3, 22);
    assert_eq!((date.month, date.day, date.is_leap_month), (2, 1, true));

    // 2025 repeated the sixth month, so the seventh starts late
    let date = lunar(2025, 8, 23);
    assert_eq!((date.month, date.day, date.is_leap_month), (7, 1, false));
}

#[test]
fn test_mid_month() {
    let date = lunar(2024, 3, 5);
    assert_eq!((date.year, date.month, date.day), (2024, 1, 25));
    assert_eq!(date.month_name(), "正月");
}

#[test]
fn test_out_of_range_is_error() {
    let date = ymd(1850, 1, 1);
    assert_eq!(
        gregorian_to_lunar(date),
        Err(FormatError::DateOutOfRange { date })
    );
}
