use crate::{
    error::ValidationIncomplete,
    models::preferences::{Accommodation, Budget, Pace, PreferenceSet, Vibe},
};

/// Second stage: traveler count, style and interests.
#[derive(Debug, Clone, Default)]
pub struct PreferenceQuestionnaire {
    answers: PreferenceSet,
}

fn toggle<T: PartialEq>(items: &mut Vec<T>, item: T) {
    match items.iter().position(|existing| *existing == item) {
        Some(index) => {
            items.remove(index);
        }
        None => items.push(item),
    }
}

impl PreferenceQuestionnaire {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answers(&self) -> &PreferenceSet {
        &self.answers
    }

    pub fn travelers(&self) -> u32 {
        self.answers.travelers
    }

    pub fn increment_travelers(&mut self) {
        self.answers.travelers = self.answers.travelers.saturating_add(1);
    }

    pub fn decrement_travelers(&mut self) {
        self.answers.travelers = self.answers.travelers.saturating_sub(1).max(1);
    }

    pub fn set_budget(&mut self, budget: Budget) {
        self.answers.budget = Some(budget);
    }

    pub fn set_pace(&mut self, pace: Pace) {
        self.answers.pace = Some(pace);
    }

    pub fn set_accommodation(&mut self, accommodation: Accommodation) {
        self.answers.accommodation = Some(accommodation);
    }

    pub fn toggle_vibe(&mut self, vibe: Vibe) {
        toggle(&mut self.answers.vibes, vibe);
    }

    pub fn toggle_interest(&mut self, interest: impl Into<String>) {
        toggle(&mut self.answers.interests, interest.into());
    }

    pub fn set_must_dos(&mut self, text: impl Into<String>) {
        self.answers.must_dos = text.into();
    }

    pub fn set_avoids(&mut self, text: impl Into<String>) {
        self.answers.avoids = text.into();
    }

    pub fn set_surprises(&mut self, surprises: bool) {
        self.answers.surprises = surprises;
    }

    pub fn can_complete(&self) -> bool {
        self.answers.is_complete()
    }

    pub fn complete(&self) -> Result<PreferenceSet, ValidationIncomplete> {
        let missing = self.answers.missing_fields();
        if missing.is_empty() {
            Ok(self.answers.clone())
        } else {
            Err(ValidationIncomplete { missing })
        }
    }
}
