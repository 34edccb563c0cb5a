use regex::Regex;
use std::sync::LazyLock;

use super::field::{FieldName, FormValues};
use crate::config::FormConfig;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .expect("email pattern is valid")
});

/// Per-field validation rules for the newsletter form
#[derive(Debug, Clone)]
pub struct FieldRules {
    first_name_min: usize,
    name_max: usize,
}

impl Default for FieldRules {
    fn default() -> Self {
        Self::from_config(&FormConfig::default())
    }
}

impl FieldRules {
    pub fn from_config(config: &FormConfig) -> Self {
        Self {
            first_name_min: config.first_name_min,
            name_max: config.name_max,
        }
    }

    /// Check one field against the current values. `Err` carries the message shown under the field.
    pub fn check(&self, field: FieldName, values: &FormValues) -> Result<(), String> {
        match field {
            FieldName::FirstName => {
                let len = values.first_name.chars().count();
                if len < self.first_name_min {
                    return Err(format!(
                        "Please provide name at least {} characters long",
                        self.first_name_min
                    ));
                }
                self.check_max(len)
            }
            FieldName::LastName => self.check_max(values.last_name.chars().count()),
            FieldName::Framework => match values.framework {
                Some(_) => Ok(()),
                None => Err("Required".to_string()),
            },
            FieldName::Email => {
                if is_valid_email(&values.email) {
                    Ok(())
                } else {
                    Err("Invalid email value".to_string())
                }
            }
        }
    }

    fn check_max(&self, len: usize) -> Result<(), String> {
        if len > self.name_max {
            Err(format!(
                "Must contain at most {} character(s)",
                self.name_max
            ))
        } else {
            Ok(())
        }
    }
}

fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_RE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Framework;

    fn values() -> FormValues {
        FormValues::default()
    }

    #[test]
    fn first_name_needs_two_characters() {
        let rules = FieldRules::default();
        let mut v = values();
        assert_eq!(
            rules.check(FieldName::FirstName, &v),
            Err("Please provide name at least 2 characters long".to_string())
        );
        v.first_name = "A".to_string();
        assert!(rules.check(FieldName::FirstName, &v).is_err());
        v.first_name = "Ada".to_string();
        assert!(rules.check(FieldName::FirstName, &v).is_ok());
    }

    #[test]
    fn names_are_capped() {
        let rules = FieldRules::default();
        let mut v = values();
        v.last_name = "x".repeat(51);
        assert!(rules.check(FieldName::LastName, &v).is_err());
        v.last_name = "x".repeat(50);
        assert!(rules.check(FieldName::LastName, &v).is_ok());
    }

    #[test]
    fn last_name_is_optional() {
        let rules = FieldRules::default();
        assert!(rules.check(FieldName::LastName, &values()).is_ok());
    }

    #[test]
    fn framework_is_required() {
        let rules = FieldRules::default();
        let mut v = values();
        assert_eq!(
            rules.check(FieldName::Framework, &v),
            Err("Required".to_string())
        );
        v.framework = Some(Framework::Svelte);
        assert!(rules.check(FieldName::Framework, &v).is_ok());
    }

    #[test]
    fn email_format() {
        for good in ["a@b.com", "ada.lovelace+news@example.co.uk", "A_B@Mail.ORG"] {
            assert!(is_valid_email(good), "{good} should be accepted");
        }
        for bad in ["", "a@b", "@b.com", "a@.com", ".a@b.com", "a..b@c.com", "a b@c.com", "a@b.c"] {
            assert!(!is_valid_email(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn limits_follow_config() {
        let rules = FieldRules::from_config(&FormConfig {
            first_name_min: 4,
            name_max: 5,
        });
        let mut v = values();
        v.first_name = "Ada".to_string();
        assert_eq!(
            rules.check(FieldName::FirstName, &v),
            Err("Please provide name at least 4 characters long".to_string())
        );
        v.first_name = "Adaline".to_string();
        assert!(rules.check(FieldName::FirstName, &v).is_err());
    }
}
