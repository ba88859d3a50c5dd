use crate::core::error::ValidationError;
use crate::core::tracing_init::DIAGNOSTICS_TARGET;
use tracing::debug;

const MAX_AGE: u32 = 150;
const ADULT_AGE: u32 = 18;
const SENIOR_AGE: u32 = 65;
const RISK_PER_YEAR: f64 = 0.1;

/// Minimum age (exclusive) accepted by [`validate_user`]
const MIN_VALID_AGE: u32 = 18;
/// Minimum name length (exclusive) accepted by [`validate_user`]
const MIN_NAME_LEN: usize = 2;

/// Raw fields for building a [`UserRecord`]
#[derive(Debug, Clone)]
pub struct UserInput {
    pub name: String,
    pub email: String,
    pub age: Option<u32>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeCategory {
    Minor,
    Adult,
    Senior,
}

impl AgeCategory {
    pub fn from_age(age: u32) -> Self {
        if age < ADULT_AGE {
            AgeCategory::Minor
        } else if age < SENIOR_AGE {
            AgeCategory::Adult
        } else {
            AgeCategory::Senior
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub full_name: String,
    pub contact: String,
    pub age: Option<u32>,
    pub location: Option<String>,
    pub category: Option<AgeCategory>,
    pub risk_score: Option<f64>,
}

/// Validate `input` and build the normalized record.
pub fn process_user_data(input: &UserInput) -> Result<UserRecord, ValidationError> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingField("name"));
    }

    let email = input.email.trim();
    if email.is_empty() {
        return Err(ValidationError::MissingField("email"));
    }

    if let Some(age) = input.age {
        if age > MAX_AGE {
            return Err(ValidationError::OutOfRange {
                field: "age",
                value: i64::from(age),
            });
        }
    }

    Ok(UserRecord {
        full_name: name.to_string(),
        contact: email.to_string(),
        age: input.age,
        location: input.address.clone(),
        category: input.age.map(AgeCategory::from_age),
        risk_score: input.age.map(|age| f64::from(age) * RISK_PER_YEAR),
    })
}

/// Profile fields checked by [`validate_user`]
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<u32>,
}

/// True iff the profile is present, the email contains `@`, the age is
/// above 18 and the name is longer than two characters.
pub fn validate_user(user: Option<&UserProfile>) -> bool {
    let Some(user) = user else {
        debug!(target: DIAGNOSTICS_TARGET, "No user supplied");
        return false;
    };

    if !user.email.as_deref().is_some_and(|email| email.contains('@')) {
        debug!(target: DIAGNOSTICS_TARGET, "Email is missing or malformed");
        return false;
    }

    if !user.age.is_some_and(|age| age > MIN_VALID_AGE) {
        debug!(target: DIAGNOSTICS_TARGET, age = ?user.age, "Age is missing or too low");
        return false;
    }

    if !user.name.as_deref().is_some_and(|name| name.chars().count() > MIN_NAME_LEN) {
        debug!(target: DIAGNOSTICS_TARGET, "Name is empty or too short");
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, email: &str, age: Option<u32>) -> UserInput {
        UserInput {
            name: name.to_string(),
            email: email.to_string(),
            age,
            address: Some("1 Main St".to_string()),
        }
    }

    fn profile(name: Option<&str>, email: Option<&str>, age: Option<u32>) -> UserProfile {
        UserProfile {
            name: name.map(str::to_string),
            email: email.map(str::to_string),
            age,
        }
    }

    #[test]
    fn test_process_user_data_valid() {
        let record = process_user_data(&input("Alice", "alice@example.com", Some(30))).unwrap();

        assert_eq!(record.full_name, "Alice");
        assert_eq!(record.contact, "alice@example.com");
        assert_eq!(record.location.as_deref(), Some("1 Main St"));
        assert_eq!(record.category, Some(AgeCategory::Adult));
        let risk = record.risk_score.unwrap();
        assert!((risk - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_process_user_data_without_age() {
        let record = process_user_data(&input("Bob", "bob@example.com", None)).unwrap();
        assert_eq!(record.category, None);
        assert_eq!(record.risk_score, None);
    }

    #[test]
    fn test_process_user_data_missing_name() {
        let err = process_user_data(&input("  ", "a@b.c", None)).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("name"));
    }

    #[test]
    fn test_process_user_data_missing_email() {
        let err = process_user_data(&input("Alice", "", None)).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("email"));
    }

    #[test]
    fn test_process_user_data_age_too_high() {
        let err = process_user_data(&input("Alice", "a@b.c", Some(151))).unwrap_err();
        assert_eq!(err, ValidationError::OutOfRange { field: "age", value: 151 });
    }

    #[test]
    fn test_age_category_boundaries() {
        assert_eq!(AgeCategory::from_age(0), AgeCategory::Minor);
        assert_eq!(AgeCategory::from_age(17), AgeCategory::Minor);
        assert_eq!(AgeCategory::from_age(18), AgeCategory::Adult);
        assert_eq!(AgeCategory::from_age(64), AgeCategory::Adult);
        assert_eq!(AgeCategory::from_age(65), AgeCategory::Senior);
    }

    #[test]
    fn test_validate_user_valid() {
        assert!(validate_user(Some(&profile(Some("Alice"), Some("a@b.c"), Some(19)))));
    }

    #[test]
    fn test_validate_user_absent() {
        assert!(!validate_user(None));
    }

    #[test]
    fn test_validate_user_email_rules() {
        assert!(!validate_user(Some(&profile(Some("Alice"), None, Some(30)))));
        assert!(!validate_user(Some(&profile(Some("Alice"), Some("alice.example.com"), Some(30)))));
    }

    #[test]
    fn test_validate_user_age_rules() {
        assert!(!validate_user(Some(&profile(Some("Alice"), Some("a@b.c"), None))));
        assert!(!validate_user(Some(&profile(Some("Alice"), Some("a@b.c"), Some(18)))));
        assert!(!validate_user(Some(&profile(Some("Alice"), Some("a@b.c"), Some(0)))));
    }

    #[test]
    fn test_validate_user_name_rules() {
        assert!(!validate_user(Some(&profile(None, Some("a@b.c"), Some(30)))));
        assert!(!validate_user(Some(&profile(Some("Al"), Some("a@b.c"), Some(30)))));
        assert!(validate_user(Some(&profile(Some("Ali"), Some("a@b.c"), Some(30)))));
    }
}
