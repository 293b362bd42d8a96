pub const DATE_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub mod serializer {
    use chrono::{DateTime, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        time_to_json(*time).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        json_to_time(&str_time).map_err(D::Error::custom)
    }

    fn time_to_json(t: NaiveDateTime) -> String {
        t.format(DATE_FMT).to_string()
    }

    // accepts the naive form written by time_to_json as well as RFC 3339 with an offset
    fn json_to_time(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
        NaiveDateTime::parse_from_str(s, DATE_FMT)
            .or_else(|_| DateTime::parse_from_rfc3339(s).map(|t| t.naive_utc()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Serialize};
    use crate::utils::date::serializer;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Stamp {
        #[serde(with = "serializer")]
        at: NaiveDateTime,
    }

    #[test]
    fn test_should_write_iso_timestamp() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_micro_opt(10, 15, 30, 123456).unwrap();
        let json = serde_json::to_string(&Stamp { at }).unwrap();
        assert_eq!(r#"{"at":"2024-03-01T10:15:30.123456"}"#, json);
    }

    #[test]
    fn test_should_read_naive_and_rfc3339_timestamps() {
        let naive: Stamp = serde_json::from_str(r#"{"at":"2024-03-01T10:15:30"}"#).unwrap();
        assert_eq!(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(10, 15, 30).unwrap(), naive.at);
        let offset: Stamp = serde_json::from_str(r#"{"at":"2024-03-01T12:15:30+02:00"}"#).unwrap();
        assert_eq!(naive.at, offset.at);
        assert!(serde_json::from_str::<Stamp>(r#"{"at":"yesterday"}"#).is_err());
    }
}
