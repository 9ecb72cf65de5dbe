//! Performance Charts
//!
//! Monthly equity series shown in the hero and performance sections.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::lists::enabled_default;
use super::text::LocalizedText;

/// Value step used when appending a data point
pub const DATA_POINT_STEP: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartSettings {
    pub visible_charts: u32,
    pub auto_rotate: bool,
    /// Milliseconds between automatic chart switches
    pub rotation_interval: u64,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self { visible_charts: 3, auto_rotate: false, rotation_interval: 5000 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// `YYYY-MM`
    pub month: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceChart {
    pub id: u32,
    #[serde(default = "enabled_default")]
    pub enabled: bool,
    #[serde(default)]
    pub title: LocalizedText,
    #[serde(default)]
    pub total_profit: f64,
    #[serde(default)]
    pub total_percentage: f64,
    #[serde(default)]
    pub currency: String,
    /// `YYYY-MM-DD`
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub data: Vec<DataPoint>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PerformanceChart {
    /// The point appended by "add data point": one month after the last
    /// point (or after the start date), valued one step above the last.
    pub fn next_data_point(&self) -> Option<DataPoint> {
        let (base, value) = match self.data.last() {
            Some(last) => (parse_month(&last.month)?, last.value + DATA_POINT_STEP),
            None => (NaiveDate::parse_from_str(&self.start_date, "%Y-%m-%d").ok()?, DATA_POINT_STEP),
        };
        let next = base.checked_add_months(Months::new(1))?;
        Some(DataPoint { month: next.format("%Y-%m").to_string(), value })
    }
}

fn parse_month(month: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d").ok()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceCharts {
    pub settings: ChartSettings,
    pub charts: Vec<PerformanceChart>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PerformanceCharts {
    pub fn chart_mut(&mut self, id: u32) -> Option<&mut PerformanceChart> {
        self.charts.iter_mut().find(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart(start: &str, data: &[(&str, f64)]) -> PerformanceChart {
        PerformanceChart {
            id: 1,
            enabled: true,
            title: LocalizedText::default(),
            total_profit: 0.0,
            total_percentage: 0.0,
            currency: "EUR".into(),
            start_date: start.into(),
            data: data.iter().map(|(m, v)| DataPoint { month: m.to_string(), value: *v }).collect(),
            extra: Map::new(),
        }
    }

    #[test]
    fn test_next_point_follows_last_month() {
        let next = chart("2024-01-15", &[("2024-03", 250.0)]).next_data_point().unwrap();
        assert_eq!(next.month, "2024-04");
        assert_eq!(next.value, 350.0);
    }

    #[test]
    fn test_next_point_rolls_over_year() {
        let next = chart("2024-01-15", &[("2024-12", 10.0)]).next_data_point().unwrap();
        assert_eq!(next.month, "2025-01");
    }

    #[test]
    fn test_first_point_after_start_date() {
        let next = chart("2024-01-31", &[]).next_data_point().unwrap();
        assert_eq!(next.month, "2024-02");
        assert_eq!(next.value, 100.0);
    }

    #[test]
    fn test_unparseable_month_yields_none() {
        assert!(chart("garbage", &[]).next_data_point().is_none());
    }
}
