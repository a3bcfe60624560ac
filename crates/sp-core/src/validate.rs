use thiserror::Error;

use crate::EmployeeProfile;

/// The only domain error: a required form field left empty. Surfaced as a
/// notification; the scoring call is simply not made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),
}

/// Checks the three required string fields before scoring. `age` and
/// `work_hours` are not validated; unset values default at capture time.
pub fn validate_profile(profile: &EmployeeProfile) -> Result<(), ValidationError> {
    if profile.education.trim().is_empty() {
        return Err(ValidationError::MissingRequiredField("education"));
    }
    if profile.occupation.trim().is_empty() {
        return Err(ValidationError::MissingRequiredField("occupation"));
    }
    if profile.marital_status.trim().is_empty() {
        return Err(ValidationError::MissingRequiredField("marital status"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_profile() -> EmployeeProfile {
        EmployeeProfile {
            age: 35,
            education: "Bachelors".into(),
            occupation: "Sales".into(),
            work_hours: 40,
            marital_status: "Divorced".into(),
            relationship: String::new(),
        }
    }

    #[test]
    fn complete_profile_passes() {
        assert_eq!(validate_profile(&complete_profile()), Ok(()));
    }

    #[test]
    fn each_required_field_is_checked() {
        let mut profile = complete_profile();
        profile.education = String::new();
        assert_eq!(
            validate_profile(&profile),
            Err(ValidationError::MissingRequiredField("education"))
        );

        let mut profile = complete_profile();
        profile.occupation = "   ".into();
        assert_eq!(
            validate_profile(&profile),
            Err(ValidationError::MissingRequiredField("occupation"))
        );

        let mut profile = complete_profile();
        profile.marital_status = String::new();
        assert_eq!(
            validate_profile(&profile),
            Err(ValidationError::MissingRequiredField("marital status"))
        );
    }

    #[test]
    fn numeric_fields_and_relationship_are_not_required() {
        let mut profile = complete_profile();
        profile.age = 0;
        profile.work_hours = 0;
        profile.relationship = String::new();
        assert_eq!(validate_profile(&profile), Ok(()));
    }
}
