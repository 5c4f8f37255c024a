use chrono::NaiveDate;

use crate::{
    error::ValidationIncomplete, models::trip::TripRequest,
    services::country_suggestions::SuggestionBox,
};

/// First stage: where the trip starts, ends and passes through, and when.
#[derive(Debug, Clone, Default)]
pub struct TripIntakeForm {
    pub start_country: SuggestionBox,
    pub end_country: SuggestionBox,
    waypoints: Vec<SuggestionBox>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl TripIntakeForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled from an earlier submission.
    pub fn from_trip(trip: &TripRequest) -> Self {
        Self {
            start_country: SuggestionBox::with_value(trip.start_country.clone()),
            end_country: SuggestionBox::with_value(trip.end_country.clone()),
            waypoints: trip
                .intermediate_countries
                .iter()
                .map(|country| SuggestionBox::with_value(country.clone()))
                .collect(),
            start_date: trip.start_date,
            end_date: trip.end_date,
        }
    }

    pub fn waypoints(&self) -> &[SuggestionBox] {
        &self.waypoints
    }

    pub fn waypoint_mut(&mut self, index: usize) -> Option<&mut SuggestionBox> {
        self.waypoints.get_mut(index)
    }

    /// Appends an empty stop and returns its index.
    pub fn add_waypoint(&mut self) -> usize {
        self.waypoints.push(SuggestionBox::new());
        self.waypoints.len() - 1
    }

    pub fn remove_waypoint(&mut self, index: usize) -> bool {
        if index < self.waypoints.len() {
            self.waypoints.remove(index);
            true
        } else {
            false
        }
    }

    pub fn update_waypoint(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.waypoints.get_mut(index) {
            Some(field) => {
                field.set_query(value);
                true
            }
            None => false,
        }
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// Setting a start date after the chosen end date clears the end date.
    pub fn set_start_date(&mut self, date: Option<NaiveDate>) {
        self.start_date = date;
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end < start {
                self.end_date = None;
            }
        }
    }

    /// Rejects an end date earlier than the start date. Returns whether the
    /// date was accepted.
    pub fn set_end_date(&mut self, date: Option<NaiveDate>) -> bool {
        if let (Some(start), Some(end)) = (self.start_date, date) {
            if end < start {
                return false;
            }
        }
        self.end_date = date;
        true
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.start_country.value().trim().is_empty() {
            missing.push("startCountry");
        }
        if self.end_country.value().trim().is_empty() {
            missing.push("endCountry");
        }
        missing
    }

    pub fn can_submit(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn submit(&self) -> Result<TripRequest, ValidationIncomplete> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ValidationIncomplete { missing });
        }

        Ok(TripRequest {
            start_country: self.start_country.value().trim().to_string(),
            end_country: self.end_country.value().trim().to_string(),
            intermediate_countries: self
                .waypoints
                .iter()
                .map(|field| field.value().trim())
                .filter(|value| !value.is_empty())
                .map(str::to_string)
                .collect(),
            start_date: self.start_date,
            end_date: self.end_date,
        })
    }
}
