use thiserror::Error;

/// Why an itinerary could not be generated. Every variant is recoverable by
/// retrying the same request.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("{0}")]
    Upstream(String),

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    InvalidResponse(String),

    #[error("Invalid request body: {0}")]
    MalformedInput(#[from] serde_json::Error),
}

/// Required answers are missing, so the form refuses to advance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Missing required fields: {}", .missing.join(", "))]
pub struct ValidationIncomplete {
    pub missing: Vec<&'static str>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("Cannot {action} from the {from} stage")]
    InvalidTransition {
        from: &'static str,
        action: &'static str,
    },

    #[error(transparent)]
    Incomplete(#[from] ValidationIncomplete),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_message_is_verbatim() {
        let err = GenerationError::Upstream("OpenAI API error: quota exceeded".to_string());
        assert_eq!(err.to_string(), "OpenAI API error: quota exceeded");
    }

    #[test]
    fn validation_lists_fields() {
        let err = ValidationIncomplete {
            missing: vec!["budget", "pace"],
        };
        assert_eq!(err.to_string(), "Missing required fields: budget, pace");
    }
}
