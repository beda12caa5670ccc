//! Count-curve chart description
//!
//! Holds everything a plotting backend needs to draw the daily state counts
//! of one run: one series per state, vertical markers for interventions, and
//! labels. Serialises to JSON for external renderers.

use serde::Serialize;

use super::result::SimulationResult;
use super::state::{PersonState, StateCounts};

/// One line of the chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Series {
    pub state: PersonState,
    /// Count per day, index = day
    pub values: Vec<u64>,
}

/// Vertical line marking an intervention
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Marker {
    pub day: u32,
    pub label: String,
    /// Marker height, the population size
    pub height: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountCurves {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub log_scale: bool,
    pub series: Vec<Series>,
    pub markers: Vec<Marker>,
}

impl CountCurves {
    pub(crate) fn build(result: &SimulationResult, overall: &[StateCounts], log: bool) -> Self {
        let series = PersonState::ALL
            .iter()
            .map(|state| Series {
                state: *state,
                values: overall.iter().map(|c| c.get(*state)).collect(),
            })
            .collect();

        let mut title = String::from("Simulation of Covid-19 spread ");
        let mut markers = Vec::new();

        match result.travel_restriction_day {
            Some(day) => {
                title.push_str(&format!("with travel restriction on day {}", day));
                markers.push(Marker {
                    day,
                    label: "travel restriction start".to_string(),
                    height: result.pop_size,
                });
            }
            None => title.push_str("without travel restrictions."),
        }

        if let Some(day) = result.social_distancing_day {
            title.push_str(&format!(
                "\nSocial Distancing in effect from day {} onwards.",
                day
            ));
            markers.push(Marker {
                day,
                label: "social distancing start".to_string(),
                height: result.pop_size,
            });
        }

        if log {
            title.insert_str(0, "LOG SCALE - ");
        }

        Self {
            title,
            x_label: "Day".to_string(),
            y_label: "Number of persons".to_string(),
            log_scale: log,
            series,
            markers,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
