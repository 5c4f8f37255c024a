use crate::models::country::COUNTRIES;

pub const MAX_SUGGESTIONS: usize = 5;

/// Countries whose name contains `query`, ignoring case, in corpus order.
pub fn suggest(query: &str) -> Vec<&'static str> {
    suggest_in(COUNTRIES, query)
}

pub fn suggest_in<'a>(corpus: &[&'a str], query: &str) -> Vec<&'a str> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    corpus
        .iter()
        .copied()
        .filter(|country| country.to_lowercase().contains(&needle))
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// State of one country autocomplete field: the typed text, the current
/// candidates and whether the candidate panel is showing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestionBox {
    query: String,
    suggestions: Vec<&'static str>,
    open: bool,
}

impl SuggestionBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        let mut field = Self::new();
        field.set_query(value);
        field.open = false;
        field
    }

    pub fn value(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[&'static str] {
        &self.suggestions
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_query(&mut self, value: impl Into<String>) {
        self.query = value.into();
        self.suggestions = suggest(&self.query);
        self.open = !self.suggestions.is_empty() && !self.matches_suggestion();
    }

    pub fn focus(&mut self) {
        if !self.query.is_empty() && !self.suggestions.is_empty() {
            self.open = true;
        }
    }

    /// Takes the suggestion at `index` verbatim and closes the panel.
    /// Returns the chosen name, or `None` when the index is out of range.
    pub fn select(&mut self, index: usize) -> Option<&'static str> {
        let choice = *self.suggestions.get(index)?;
        self.query = choice.to_string();
        self.suggestions = suggest(&self.query);
        self.open = false;
        Some(choice)
    }

    pub fn click_outside(&mut self) {
        self.open = false;
    }

    fn matches_suggestion(&self) -> bool {
        self.suggestions
            .iter()
            .any(|country| country.eq_ignore_ascii_case(&self.query))
    }
}
