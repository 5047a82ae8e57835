use chrono::{FixedOffset, NaiveDate};
use datefmt_base::{FieldValue, RowError, TextSegment};

fn shanghai() -> FixedOffset {
    FixedOffset::east_opt(8 * 3600).unwrap()
}

#[test]
fn test_value_from_str() {
    let v: FieldValue = "hello".into();
    assert_eq!(v.as_plain_text().as_deref(), Some("hello"));
}

#[test]
fn test_value_from_naive_date() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    let v: FieldValue = date.into();
    assert_eq!(v.to_date(shanghai()), Ok(date));
}

#[test]
fn test_multi_segment_text() {
    let v = FieldValue::Text(vec![TextSegment::plain("2024-"), TextSegment::plain("03-05")]);
    assert_eq!(
        v.to_date(shanghai()),
        Ok(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap())
    );
}

#[test]
fn test_bool_is_unparseable() {
    assert_eq!(
        FieldValue::Bool(true).to_date(shanghai()),
        Err(RowError::UnparseableDate {
            raw: "true".to_string()
        })
    );
}

#[test]
fn test_serde_shape() {
    let v = FieldValue::text("Mar 5, 2024");
    let json = serde_json::to_value(&v).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "type": "text",
            "value": [{ "type": "text", "text": "Mar 5, 2024" }]
        })
    );

    let back: FieldValue =
        serde_json::from_str(r#"{"type": "date_time", "value": 1709568000000}"#).unwrap();
    assert_eq!(back, FieldValue::DateTime(1_709_568_000_000));
}
