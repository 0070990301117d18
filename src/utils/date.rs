use chrono::NaiveDateTime;

pub const DATE_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

// due dates are shown to patrons without the time of day
pub const DUE_DATE_FMT: &str = "%Y-%m-%d";

pub fn format_due_date(date: &NaiveDateTime) -> String {
    date.format(DUE_DATE_FMT).to_string()
}

pub mod serializer {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        time.format(DATE_FMT).to_string().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&str_time, DATE_FMT).map_err(D::Error::custom)
    }
}

pub mod opt_serializer {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(time: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error> {
        time.map(|t| t.format(DATE_FMT).to_string()).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error> {
        let str_time: Option<String> = Deserialize::deserialize(deserializer)?;
        match str_time {
            Some(s) => NaiveDateTime::parse_from_str(&s, DATE_FMT).map(Some).map_err(D::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Serialize};
    use crate::utils::date::{format_due_date, opt_serializer, serializer};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "serializer")]
        at: NaiveDateTime,
        #[serde(with = "opt_serializer")]
        returned_at: Option<NaiveDateTime>,
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).and_then(|d| d.and_hms_milli_opt(4, 40, 35, 726)).expect("valid date")
    }

    #[tokio::test]
    async fn test_should_format_due_date() {
        assert_eq!("2024-03-09", format_due_date(&date(2024, 3, 9)));
    }

    #[tokio::test]
    async fn test_should_serialize_dates() {
        let stamped = Stamped { at: date(2022, 9, 24), returned_at: None };
        let json = serde_json::to_string(&stamped).expect("should serialize");
        assert_eq!(r#"{"at":"2022-09-24T04:40:35.726","returned_at":null}"#, json);
        let loaded: Stamped = serde_json::from_str(json.as_str()).expect("should deserialize");
        assert_eq!(stamped, loaded);
    }

    #[tokio::test]
    async fn test_should_deserialize_optional_date() {
        let loaded: Stamped = serde_json::from_str(
            r#"{"at":"2022-09-24T04:40:35.726","returned_at":"2022-10-01T04:40:35.726"}"#).expect("should deserialize");
        assert_eq!(Some(date(2022, 10, 1)), loaded.returned_at);
    }
}
