//! Clinical record types consumed by the renderers.
//!
//! Records are read-only snapshots owned by the record store. They serialize
//! with camelCase field names, the shape the clinic database hands out.
//! Dates and decimals are parsed leniently: a value that cannot be understood
//! becomes `None` and later renders as "Not recorded" instead of failing the
//! whole export.

/// A record that belongs to exactly one patient.
pub trait PatientScoped {
    /// Id of the owning patient.
    fn patient_id(&self) -> &str;
}

macro_rules! impl_patient_scoped {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::model::PatientScoped for $ty {
                fn patient_id(&self) -> &str {
                    &self.patient_id
                }
            }
        )+
    };
}

mod background;
mod clinical;
mod patient;

pub use background::{Allergy, Condition, Medication, SocialHistory};
pub use clinical::{Followup, Imaging, Lab, Note, Surgery, Visit};
pub use patient::{Patient, PatientStatus};

/// Lenient deserializers shared by the record types.
pub(crate) mod lenient {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    const DATE_TIME_FORMATS: [&str; 3] =
        ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"];

    /// Parse a date or date-time string.
    ///
    /// Accepts RFC 3339, ISO date-times without offset, and plain dates.
    pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.naive_utc());
        }
        DATE_TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
    }

    /// Deserialize an optional date; unparseable values become `None`.
    pub fn datetime<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::String(s)) => parse_datetime(&s),
            _ => None,
        })
    }

    /// Deserialize an optional number from a JSON number or a numeric string
    /// (decimal columns arrive as strings).
    pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        })
    }

    /// Deserialize an optional integer, accepting integral floats and strings.
    pub fn integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
            Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
            _ => None,
        })
    }

    /// Deserialize an optional string, rendering scalars as text.
    pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::String(s)) => Some(s),
            Some(Value::Number(n)) => Some(n.to_string()),
            Some(Value::Bool(b)) => Some(b.to_string()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::lenient::parse_datetime;
    use super::{Allergy, PatientScoped, Visit};
    use chrono::NaiveDate;

    #[test]
    fn test_records_report_their_patient() {
        let allergy = Allergy {
            patient_id: "p-1".into(),
            ..Default::default()
        };
        let visit = Visit {
            patient_id: "p-2".into(),
            ..Default::default()
        };
        let scoped: [&dyn PatientScoped; 2] = [&allergy, &visit];
        let ids: Vec<&str> = scoped.iter().map(|r| r.patient_id()).collect();
        assert_eq!(ids, vec!["p-1", "p-2"]);
    }

    #[test]
    fn test_parse_plain_date() {
        let dt = parse_datetime("2024-03-15").unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn test_parse_rfc3339() {
        let dt = parse_datetime("2024-03-15T10:30:00.000Z").unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn test_parse_iso_without_offset() {
        assert!(parse_datetime("2024-03-15T10:30:00").is_some());
        assert!(parse_datetime("2024-03-15 10:30:00").is_some());
    }

    #[test]
    fn test_unparseable_dates() {
        assert!(parse_datetime("").is_none());
        assert!(parse_datetime("not a date").is_none());
        assert!(parse_datetime("2024-13-45").is_none());
    }
}
