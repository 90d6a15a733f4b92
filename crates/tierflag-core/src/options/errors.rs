use crate::errors::TierflagError;

#[derive(Debug, thiserror::Error)]
pub enum OptionError {
    #[error("Option name '{name}' is already used by option '{existing}'")]
    DuplicateName { name: String, existing: String },
}

impl TierflagError for OptionError {
    fn error_code(&self) -> &'static str {
        match self {
            OptionError::DuplicateName { .. } => "OPTION_DUPLICATE_NAME",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_name_display() {
        let error = OptionError::DuplicateName {
            name: "c".to_string(),
            existing: "count".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Option name 'c' is already used by option 'count'"
        );
        assert_eq!(error.error_code(), "OPTION_DUPLICATE_NAME");
        assert!(!error.is_user_error());
    }
}
