//! JSON shapes returned by the resort ranking service.
//!
//! The search endpoint uses PascalCase keys while the peak-info endpoints use
//! snake_case keys for resort attributes, so each struct carries its own
//! serde naming. Optional numerics deserialize to `None` both when the key is
//! `null` and when it is missing.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One row of `GET /api/search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RankingRecord {
    /// 1-based position assigned by the service.
    pub rank: u32,
    pub name: String,
    pub prefecture: String,
    /// Average snowfall over the interval, in centimetres.
    pub avg_snowfall: Option<f64>,
    pub years_with_data: Option<f64>,
    pub top_elevation: Option<f64>,
    pub base_elevation: Option<f64>,
    pub vertical_drop: Option<f64>,
    pub num_courses: Option<f64>,
    /// Not shown in the table but kept so nothing the service sends is lost.
    #[serde(rename = "LongestCourseKM", default)]
    pub longest_course_km: Option<f64>,
}

/// Static resort attributes as returned inside peak-info payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResortSummary {
    pub id: String,
    pub name: String,
    pub prefecture: String,
    pub top_elevation_m: Option<f64>,
    pub base_elevation_m: Option<f64>,
    pub vertical_m: Option<f64>,
    pub num_courses: Option<f64>,
}

/// Quality indicator attached to a peak period by the upstream analysis.
///
/// Levels outside the known three keep the service's text as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
    Other(String),
}

impl ConfidenceLevel {
    pub fn as_str(&self) -> &str {
        match self {
            ConfidenceLevel::High => "high",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::Low => "low",
            ConfidenceLevel::Other(raw) => raw,
        }
    }
}

impl From<String> for ConfidenceLevel {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "high" => ConfidenceLevel::High,
            "medium" => ConfidenceLevel::Medium,
            "low" => ConfidenceLevel::Low,
            _ => ConfidenceLevel::Other(raw),
        }
    }
}

impl From<ConfidenceLevel> for String {
    fn from(level: ConfidenceLevel) -> Self {
        match level {
            ConfidenceLevel::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A contiguous high-snowfall date range, ranked among a resort's peaks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeakPeriod {
    pub peak_rank: u32,
    pub start_date: String,
    pub end_date: String,
    pub total_period_snowfall: f64,
    pub avg_daily_snowfall: f64,
    pub confidence_level: ConfidenceLevel,
}

/// A resort together with its peak periods, best peak first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResortPeaksRecord {
    #[serde(rename = "Resort")]
    pub resort: ResortSummary,
    #[serde(rename = "Peaks", default, deserialize_with = "null_as_empty")]
    pub peaks: Vec<PeakPeriod>,
}

/// Entry of `GET /api/resorts-with-peaks`, used to fill the resort selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResortOption {
    pub id: String,
    pub name: String,
}

/// Body of `GET /api/peak-info`, whose shape depends on the requested scope.
#[derive(Debug, Clone, PartialEq)]
pub enum PeakInfoResponse {
    /// `resort_id=all`
    All(Vec<ResortPeaksRecord>),
    /// `resort_id=<id>`
    Single(ResortPeaksRecord),
}

impl PeakInfoResponse {
    /// Unify both shapes into one ordered sequence.
    pub fn into_records(self) -> Vec<ResortPeaksRecord> {
        match self {
            PeakInfoResponse::All(records) => records,
            PeakInfoResponse::Single(record) => vec![record],
        }
    }
}

/// Go encodes a nil slice as `null`; treat it like an empty list.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranking_record_from_json() {
        let json = r#"{"Rank":1,"Name":"Niseko","Prefecture":"hokkaido","AvgSnowfall":50,
            "YearsWithData":12,"TopElevation":1308,"BaseElevation":null,"VerticalDrop":null,
            "NumCourses":61,"LongestCourseKM":5.6}"#;
        let record: RankingRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.rank, 1);
        assert_eq!(record.avg_snowfall, Some(50.0));
        assert_eq!(record.base_elevation, None);
        assert_eq!(record.longest_course_km, Some(5.6));
    }

    #[test]
    fn test_ranking_record_missing_optionals() {
        let json = r#"{"Rank":2,"Name":"A","Prefecture":"nagano"}"#;
        let record: RankingRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.avg_snowfall, None);
        assert_eq!(record.num_courses, None);
    }

    #[test]
    fn test_resort_peaks_null_peaks() {
        let json = r#"{"Resort":{"id":"r1","name":"Hakuba","prefecture":"nagano",
            "top_elevation_m":1831,"base_elevation_m":760,"vertical_m":1071,"num_courses":null},
            "Peaks":null}"#;
        let record: ResortPeaksRecord = serde_json::from_str(json).unwrap();
        assert!(record.peaks.is_empty());
        assert_eq!(record.resort.num_courses, None);
    }

    #[test]
    fn test_confidence_levels() {
        let json = r#"[
            {"peak_rank":1,"start_date":"01-10","end_date":"01-14","total_period_snowfall":212.4,"avg_daily_snowfall":42.5,"confidence_level":"high"},
            {"peak_rank":2,"start_date":"02-01","end_date":"02-01","total_period_snowfall":80.0,"avg_daily_snowfall":80.0,"confidence_level":"tentative"}
        ]"#;
        let peaks: Vec<PeakPeriod> = serde_json::from_str(json).unwrap();
        assert_eq!(peaks[0].confidence_level, ConfidenceLevel::High);
        assert_eq!(
            peaks[1].confidence_level,
            ConfidenceLevel::Other("tentative".to_string())
        );
        assert_eq!(peaks[0].confidence_level.to_string(), "high");
        assert_eq!(peaks[1].confidence_level.to_string(), "tentative");
    }

    #[test]
    fn test_peak_info_into_records() {
        let resort = ResortSummary {
            id: "r1".into(),
            name: "Hakuba".into(),
            prefecture: "nagano".into(),
            top_elevation_m: None,
            base_elevation_m: None,
            vertical_m: None,
            num_courses: None,
        };
        let record = ResortPeaksRecord {
            resort,
            peaks: Vec::new(),
        };
        assert_eq!(PeakInfoResponse::Single(record.clone()).into_records().len(), 1);
        assert_eq!(
            PeakInfoResponse::All(vec![record.clone(), record]).into_records().len(),
            2
        );
        assert!(PeakInfoResponse::All(Vec::new()).into_records().is_empty());
    }
}
