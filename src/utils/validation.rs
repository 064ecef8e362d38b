use crate::models::{car::CAR_STATUSES, user::USER_ROLES, working_hour::DAYS_OF_WEEK};
use validator::ValidationError;

pub fn validate_car_status(value: &str) -> Result<(), ValidationError> {
    if CAR_STATUSES.iter().any(|s| s.eq_ignore_ascii_case(value)) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_car_status"))
    }
}

pub fn validate_user_role(value: &str) -> Result<(), ValidationError> {
    if USER_ROLES.iter().any(|r| r.eq_ignore_ascii_case(value)) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_user_role"))
    }
}

pub fn validate_day_of_week(value: &str) -> Result<(), ValidationError> {
    if DAYS_OF_WEEK.iter().any(|d| d.eq_ignore_ascii_case(value)) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_day_of_week"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_statuses_case_insensitively() {
        assert!(validate_car_status("AVAILABLE").is_ok());
        assert!(validate_car_status("sold").is_ok());
        assert!(validate_car_status("PENDING").is_err());
    }

    #[test]
    fn accepts_known_roles_only() {
        assert!(validate_user_role("ADMIN").is_ok());
        assert!(validate_user_role("USER").is_ok());
        assert!(validate_user_role("SUPERUSER").is_err());
    }

    #[test]
    fn accepts_known_days_only() {
        assert!(validate_day_of_week("MONDAY").is_ok());
        assert!(validate_day_of_week("FUNDAY").is_err());
    }
}
