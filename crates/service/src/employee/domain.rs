//! Employee payloads and their validation.
//!
//! The update type carries no companyId field: an employee cannot be moved
//! between companies, so a supplied value is dropped before validation ever
//! sees it. The DISMISSED/terminationDate rule is payload-only and applies to
//! partial updates as well: `{"status": "DISMISSED"}` alone must fail no
//! matter what the stored record says.

use sea_orm::prelude::DateTimeWithTimeZone;
use serde::Deserialize;
use uuid::Uuid;

use models::employee::Status;

use crate::errors::ServiceError;
use crate::validation::{self, FieldViolation};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeInput {
    pub company_id: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
    pub termination_date: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeInput {
    pub email: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
    pub termination_date: Option<String>,
}

/// Fully validated creation payload. The password is still plaintext here;
/// the service hashes it right before insert.
#[derive(Clone, Debug)]
pub struct NewEmployee {
    pub company_id: Uuid,
    pub email: String,
    pub name: String,
    pub password: String,
    pub role: String,
    pub status: Status,
    pub termination_date: Option<DateTimeWithTimeZone>,
}

/// Validated partial update.
#[derive(Clone, Debug, Default)]
pub struct EmployeePatch {
    pub email: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub status: Option<Status>,
    pub termination_date: Option<DateTimeWithTimeZone>,
}

fn parse_status(out: &mut Vec<FieldViolation>, path: &str, raw: &str) -> Option<Status> {
    match raw.trim().parse::<Status>() {
        Ok(s) => Some(s),
        Err(()) => {
            out.push(FieldViolation::new(
                "status must be one of ACTIVE, DISMISSED, ON_VACATION",
                path,
            ));
            None
        }
    }
}

fn check_dismissed_rule(out: &mut Vec<FieldViolation>, status: Option<Status>, date_present: bool) {
    if status == Some(Status::Dismissed) && !date_present {
        out.push(FieldViolation::new(
            "terminationDate is required when status is DISMISSED",
            "terminationDate",
        ));
    }
}

impl CreateEmployeeInput {
    pub fn validate(self) -> Result<NewEmployee, ServiceError> {
        let mut out = Vec::new();

        let company_id = validation::required_string(&mut out, "companyId", self.company_id, 1, 36)
            .and_then(|raw| validation::parse_uuid(&mut out, "companyId", &raw));
        let email = validation::required_string(&mut out, "email", self.email, 1, 100)
            .and_then(|v| validation::check_email(&mut out, "email", v));
        let name = validation::required_string(&mut out, "name", self.name, 1, 100);
        let password = validation::required_string(&mut out, "password", self.password, 6, 100);
        let role = validation::required_string(&mut out, "role", self.role, 1, 100);
        let status = match self.status {
            None => Some(Status::default()),
            Some(raw) => parse_status(&mut out, "status", &raw),
        };

        let date_present = self.termination_date.is_some();
        let termination_date = self
            .termination_date
            .and_then(|raw| validation::parse_timestamp(&mut out, "terminationDate", raw.trim()));
        check_dismissed_rule(&mut out, status, date_present);

        match (company_id, email, name, password, role, status) {
            (Some(company_id), Some(email), Some(name), Some(password), Some(role), Some(status))
                if out.is_empty() =>
            {
                Ok(NewEmployee {
                    company_id,
                    email,
                    name,
                    password,
                    role,
                    status,
                    termination_date: termination_date.map(Into::into),
                })
            }
            _ => Err(ServiceError::Validation(out)),
        }
    }
}

impl UpdateEmployeeInput {
    pub fn validate(self) -> Result<EmployeePatch, ServiceError> {
        let mut out = Vec::new();

        let email = validation::optional_string(&mut out, "email", self.email, 1, 100)
            .and_then(|v| validation::check_email(&mut out, "email", v));
        let name = validation::optional_string(&mut out, "name", self.name, 1, 100);
        let password = validation::optional_string(&mut out, "password", self.password, 6, 100);
        let role = validation::optional_string(&mut out, "role", self.role, 1, 100);
        let status = match self.status {
            None => None,
            Some(raw) => parse_status(&mut out, "status", &raw),
        };

        let date_present = self.termination_date.is_some();
        let termination_date = self
            .termination_date
            .and_then(|raw| validation::parse_timestamp(&mut out, "terminationDate", raw.trim()));
        check_dismissed_rule(&mut out, status, date_present);

        if out.is_empty() {
            Ok(EmployeePatch {
                email,
                name,
                password,
                role,
                status,
                termination_date: termination_date.map(Into::into),
            })
        } else {
            Err(ServiceError::Validation(out))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> CreateEmployeeInput {
        serde_json::from_value(serde_json::json!({
            "companyId": Uuid::new_v4().to_string(),
            "email": "alice@email.com",
            "name": "Alice",
            "password": "password123",
            "role": "Developer"
        }))
        .unwrap()
    }

    #[test]
    fn valid_creation_defaults_to_active() {
        let new = valid_create().validate().unwrap();
        assert_eq!(new.status, Status::Active);
        assert!(new.termination_date.is_none());
    }

    #[test]
    fn malformed_company_id_is_a_validation_error() {
        let mut input = valid_create();
        input.company_id = Some("12345".into());
        let Err(ServiceError::Validation(fields)) = input.validate() else {
            panic!("expected validation failure");
        };
        assert_eq!(fields[0].path, "companyId");
    }

    #[test]
    fn short_password_is_rejected() {
        let mut input = valid_create();
        input.password = Some("12345".into());
        assert!(input.validate().is_err());
    }

    #[test]
    fn dismissed_without_termination_date_fails_on_create() {
        let mut input = valid_create();
        input.status = Some("DISMISSED".into());
        let Err(ServiceError::Validation(fields)) = input.validate() else {
            panic!("expected validation failure");
        };
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].path, "terminationDate");
    }

    #[test]
    fn dismissed_with_termination_date_passes() {
        let mut input = valid_create();
        input.status = Some("DISMISSED".into());
        input.termination_date = Some("2024-06-01T12:00:00Z".into());
        let new = input.validate().unwrap();
        assert_eq!(new.status, Status::Dismissed);
        assert!(new.termination_date.is_some());
    }

    #[test]
    fn dismissed_rule_applies_to_partial_updates() {
        let input: UpdateEmployeeInput =
            serde_json::from_value(serde_json::json!({"status": "DISMISSED"})).unwrap();
        let Err(ServiceError::Validation(fields)) = input.validate() else {
            panic!("expected validation failure");
        };
        assert_eq!(fields[0].path, "terminationDate");
    }

    #[test]
    fn unknown_status_is_rejected() {
        let input: UpdateEmployeeInput =
            serde_json::from_value(serde_json::json!({"status": "FIRED"})).unwrap();
        assert!(input.validate().is_err());
    }

    #[test]
    fn update_ignores_company_id_in_raw_payload() {
        let input: UpdateEmployeeInput = serde_json::from_value(serde_json::json!({
            "companyId": Uuid::new_v4().to_string(),
            "name": "Bob"
        }))
        .unwrap();
        let patch = input.validate().unwrap();
        assert_eq!(patch.name.as_deref(), Some("Bob"));
    }

    #[test]
    fn empty_update_is_valid() {
        let patch = UpdateEmployeeInput::default().validate().unwrap();
        assert!(patch.status.is_none());
    }
}
