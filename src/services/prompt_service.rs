use crate::models::{preferences::PreferenceSet, trip::TripRequest};

pub const SYSTEM_PROMPT: &str = "You are an expert travel planner with extensive knowledge of destinations worldwide. Create comprehensive, personalized travel itineraries that are practical, detailed, and exciting.";

const NOT_SPECIFIED: &str = "Not specified";

const PLAN_SECTIONS: [&str; 8] = [
    "A day-by-day detailed itinerary",
    "Recommended accommodations for each location",
    "Transportation suggestions between countries/cities",
    "Budget breakdown",
    "Local tips and cultural insights",
    "Must-try food and restaurants",
    "Packing recommendations",
    "Emergency contacts and important information",
];

fn or_not_specified(value: &str) -> &str {
    if value.trim().is_empty() {
        NOT_SPECIFIED
    } else {
        value
    }
}

/// Comma-joins the non-blank items, or `fallback` when none are left.
fn joined_or<T: AsRef<str>>(items: &[T], fallback: &'static str) -> String {
    let items: Vec<&str> = items
        .iter()
        .map(|item| item.as_ref().trim())
        .filter(|item| !item.is_empty())
        .collect();
    if items.is_empty() {
        fallback.to_string()
    } else {
        items.join(", ")
    }
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| NOT_SPECIFIED.to_string())
}

/// User message for the chat completion: every trip and preference field
/// followed by the list of sections the plan must cover.
pub fn build_travel_prompt(trip: &TripRequest, preferences: &PreferenceSet) -> String {
    let vibes: Vec<&str> = preferences.vibes.iter().map(|vibe| vibe.as_str()).collect();
    let duration = trip
        .duration_days()
        .map(|days| format!("{} days", days))
        .unwrap_or_else(|| NOT_SPECIFIED.to_string());
    let sections = PLAN_SECTIONS
        .iter()
        .enumerate()
        .map(|(i, section)| format!("{}. {}", i + 1, section))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Create a detailed travel itinerary based on the following information:

TRIP DETAILS:
- Start Country: {start}
- End Country: {end}
- Intermediate Countries: {intermediate}
- Start Date: {start_date}
- End Date: {end_date}
- Duration: {duration}

TRAVELER PREFERENCES:
- Number of travelers: {travelers}
- Budget: {budget}
- Travel pace: {pace}
- Preferred vibes: {vibes}
- Accommodation type: {accommodation}
- Interests: {interests}
- Must-do activities: {must_dos}
- Things to avoid: {avoids}
- Open to surprises: {surprises}

Please provide:
{sections}

Format the response in a clear, easy-to-read structure with headings and bullet points.",
        start = or_not_specified(&trip.start_country),
        end = or_not_specified(&trip.end_country),
        intermediate = joined_or(&trip.intermediate_countries, "None"),
        start_date = optional(trip.start_date),
        end_date = optional(trip.end_date),
        duration = duration,
        travelers = preferences.travelers,
        budget = optional(preferences.budget),
        pace = optional(preferences.pace),
        vibes = joined_or(&vibes, NOT_SPECIFIED),
        accommodation = optional(preferences.accommodation),
        interests = joined_or(&preferences.interests, NOT_SPECIFIED),
        must_dos = or_not_specified(&preferences.must_dos),
        avoids = or_not_specified(&preferences.avoids),
        surprises = if preferences.surprises { "Yes" } else { "No" },
        sections = sections,
    )
}
