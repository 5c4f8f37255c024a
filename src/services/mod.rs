pub mod country_suggestions;
pub mod openai_service;
pub mod plan_export;
pub mod plan_formatter;
pub mod prompt_service;
