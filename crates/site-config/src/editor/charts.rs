//! Performance chart editing: scalar chart fields and the monthly data points.

use chrono::NaiveDate;

use super::{Confirmation, FieldValue};
use crate::error::{EditError, EditResult};
use crate::model::{DataPoint, Lang, PerformanceChart};
use crate::store::ConfigStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartField {
    Enabled,
    Title(Lang),
    TotalProfit,
    TotalPercentage,
    /// Three-letter code
    Currency,
    /// `YYYY-MM-DD`
    StartDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataPointField {
    Month,
    Value,
}

fn invalid(field: impl std::fmt::Debug, value: &str) -> EditError {
    EditError::InvalidValue { field: format!("{:?}", field), value: value.to_string() }
}

fn parse_number(field: impl std::fmt::Debug + Copy, text: &str) -> EditResult<f64> {
    text.trim().parse::<f64>().map_err(|_| invalid(field, text))
}

pub struct ChartEditor<'a> {
    chart: &'a mut PerformanceChart,
    dirty: &'a mut bool,
    revision: &'a mut u64,
}

impl<'a> ChartEditor<'a> {
    fn touch(&mut self) {
        *self.dirty = true;
        *self.revision = self.revision.wrapping_add(1);
    }

    pub fn chart(&self) -> &PerformanceChart {
        self.chart
    }

    pub fn set(&mut self, field: ChartField, value: impl Into<FieldValue>) -> EditResult<()> {
        let value = value.into();
        let chart = &mut *self.chart;
        match field {
            ChartField::Enabled => chart.enabled = value.into_flag(field)?,
            ChartField::Title(lang) => *chart.title.get_mut(lang) = value.into_text(field)?,
            ChartField::TotalProfit => chart.total_profit = parse_number(field, value.as_text())?,
            ChartField::TotalPercentage => chart.total_percentage = parse_number(field, value.as_text())?,
            ChartField::Currency => {
                let code = value.into_text(field)?;
                if code.chars().count() > 3 {
                    return Err(invalid(field, &code));
                }
                chart.currency = code;
            }
            ChartField::StartDate => {
                let date = value.into_text(field)?;
                NaiveDate::parse_from_str(&date, "%Y-%m-%d").map_err(|_| invalid(field, &date))?;
                chart.start_date = date;
            }
        }
        self.touch();
        Ok(())
    }

    /// Append the month after the last point, one step higher
    pub fn add_data_point(&mut self) -> EditResult<&DataPoint> {
        let point = self
            .chart
            .next_data_point()
            .ok_or_else(|| invalid(ChartField::StartDate, &self.chart.start_date))?;
        self.chart.data.push(point);
        self.touch();
        let last = self.chart.data.len() - 1;
        Ok(&self.chart.data[last])
    }

    /// Remove by position. A position past the end is a no-op.
    pub fn remove_data_point(&mut self, index: usize, confirmation: Confirmation) -> EditResult<Option<DataPoint>> {
        if confirmation == Confirmation::Declined {
            return Err(EditError::NotConfirmed);
        }
        if index >= self.chart.data.len() {
            return Ok(None);
        }
        let removed = self.chart.data.remove(index);
        self.touch();
        Ok(Some(removed))
    }

    pub fn update_data_point(&mut self, index: usize, field: DataPointField, text: &str) -> EditResult<()> {
        let point = self
            .chart
            .data
            .get_mut(index)
            .ok_or_else(|| EditError::NotFound { kind: "data point", id: index.to_string() })?;
        match field {
            DataPointField::Month => {
                NaiveDate::parse_from_str(&format!("{}-01", text), "%Y-%m-%d").map_err(|_| invalid(field, text))?;
                point.month = text.to_string();
            }
            DataPointField::Value => point.value = parse_number(field, text)?,
        }
        self.touch();
        Ok(())
    }
}

impl ConfigStore {
    pub fn chart(&mut self, id: u32) -> EditResult<ChartEditor<'_>> {
        let charts = self.performance_charts.as_mut().ok_or(EditError::NotLoaded("performance-charts"))?;
        let chart = charts
            .chart_mut(id)
            .ok_or_else(|| EditError::NotFound { kind: "chart", id: id.to_string() })?;
        Ok(ChartEditor { chart, dirty: &mut self.dirty, revision: &mut self.revision })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::resource::Resource;

    fn store() -> ConfigStore {
        let mut store = ConfigStore::default();
        store
            .apply(
                Resource::PerformanceCharts,
                json!({ "charts": [{ "id": 1, "currency": "EUR", "startDate": "2024-01-01",
                                     "data": [{ "month": "2024-02", "value": 120 }] }] }),
            )
            .unwrap();
        store
    }

    #[test]
    fn test_add_and_remove_points() {
        let mut store = store();
        let mut chart = store.chart(1).unwrap();
        let added = chart.add_data_point().unwrap().clone();
        assert_eq!(added.month, "2024-03");
        assert_eq!(added.value, 220.0);

        assert_eq!(chart.remove_data_point(0, Confirmation::Declined), Err(EditError::NotConfirmed));
        assert_eq!(chart.chart().data.len(), 2);
        assert!(chart.remove_data_point(5, Confirmation::Confirmed).unwrap().is_none());
        assert!(chart.remove_data_point(0, Confirmation::Confirmed).unwrap().is_some());
        assert_eq!(chart.chart().data[0].month, "2024-03");
        assert!(store.is_dirty());
    }

    #[test]
    fn test_invalid_values_leave_chart_alone() {
        let mut store = store();
        let mut chart = store.chart(1).unwrap();
        assert!(chart.set(ChartField::Currency, "EURO").is_err());
        assert!(chart.update_data_point(0, DataPointField::Month, "2024-13").is_err());
        assert!(chart.update_data_point(0, DataPointField::Value, "lots").is_err());
        chart.update_data_point(0, DataPointField::Value, "150.5").unwrap();
        assert_eq!(chart.chart().data[0].value, 150.5);
    }

    #[test]
    fn test_missing_chart() {
        let mut store = store();
        assert!(matches!(store.chart(9), Err(EditError::NotFound { .. })));
        let mut empty = ConfigStore::default();
        assert!(matches!(empty.chart(1), Err(EditError::NotLoaded(_))));
    }
}
