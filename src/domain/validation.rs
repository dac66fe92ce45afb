//! Local submission checks that run before any network activity.
//!
//! Only the two paths are required. Flags, config path and timeout are
//! accepted as typed: flags use tool-specific syntax this crate does not
//! parse, and the timeout is coerced rather than rejected.

use std::fmt;

use thiserror::Error;

use crate::domain::TransferJobConfig;

/// Message shown in the output area when a required path is blank.
pub const MISSING_PATHS_MESSAGE: &str = "Error: Source and destination paths are required.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Source,
    Destination,
}

impl RequiredField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequiredField::Source => "source",
            RequiredField::Destination => "destination",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingRequiredField(RequiredField),
}

impl ValidationError {
    /// Text written to the output area.
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::MissingRequiredField(_) => MISSING_PATHS_MESSAGE,
        }
    }
}

/// Check that both paths are present. Source is reported first.
pub fn validate(config: &TransferJobConfig) -> Result<(), ValidationError> {
    if is_blank(&config.source) {
        return Err(ValidationError::MissingRequiredField(RequiredField::Source));
    }
    if is_blank(&config.destination) {
        return Err(ValidationError::MissingRequiredField(RequiredField::Destination));
    }
    Ok(())
}

fn is_blank(value: &str) -> bool {
    value.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Timeout, Tool};
    use proptest::prelude::*;

    #[test]
    fn accepts_both_paths() {
        let config = TransferJobConfig::new(Tool::Rsync, "/a", "/b");
        assert_eq!(validate(&config), Ok(()));
    }

    #[test]
    fn names_missing_source_first() {
        let config = TransferJobConfig::new(Tool::Rsync, "", "");
        assert_eq!(
            validate(&config),
            Err(ValidationError::MissingRequiredField(RequiredField::Source))
        );
    }

    #[test]
    fn names_missing_destination() {
        let config = TransferJobConfig::new(Tool::Rclone, "remote:bucket", "");
        let err = validate(&config).unwrap_err();
        assert_eq!(err, ValidationError::MissingRequiredField(RequiredField::Destination));
        assert_eq!(err.to_string(), "Missing required field: destination");
        assert_eq!(err.user_message(), MISSING_PATHS_MESSAGE);
    }

    #[test]
    fn whitespace_paths_are_sent_as_typed() {
        let config = TransferJobConfig::new(Tool::Rsync, "   ", " ");
        assert_eq!(validate(&config), Ok(()));
    }

    #[test]
    fn other_fields_are_never_rejected() {
        let config = TransferJobConfig {
            flags: String::new(),
            timeout: Timeout::parse("not a number"),
            config_path: Some(String::new()),
            ..TransferJobConfig::new(Tool::Rclone, "a", "b")
        };
        assert!(validate(&config).is_ok());
    }

    proptest! {
        #[test]
        fn blank_source_always_rejected(destination in ".*", flags in ".*") {
            let config = TransferJobConfig {
                flags,
                ..TransferJobConfig::new(Tool::Rsync, "", destination)
            };
            prop_assert_eq!(
                validate(&config),
                Err(ValidationError::MissingRequiredField(RequiredField::Source))
            );
        }
    }
}
