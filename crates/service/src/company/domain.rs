//! Company payloads and their validation.
//!
//! Inputs are all-optional at the serde layer so that required-field failures
//! surface through the collected-violation channel instead of a
//! deserialization error. The update type has no cnpj field at all: the tax
//! identifier is immutable and a supplied value is dropped before validation.

use serde::Deserialize;

use crate::errors::ServiceError;
use crate::validation::{self, FieldViolation};

#[derive(Clone, Debug, Default, Deserialize)]
pub struct AddressInput {
    pub city: Option<String>,
    pub state: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompanyInput {
    pub name: Option<String>,
    pub cnpj: Option<String>,
    pub sector: Option<String>,
    pub address: Option<AddressInput>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompanyInput {
    pub name: Option<String>,
    pub sector: Option<String>,
    pub address: Option<AddressInput>,
}

/// Fully validated creation payload.
#[derive(Clone, Debug)]
pub struct NewCompany {
    pub name: String,
    pub cnpj: String,
    pub sector: String,
    pub city: String,
    pub state: String,
}

/// Validated partial update.
#[derive(Clone, Debug, Default)]
pub struct CompanyPatch {
    pub name: Option<String>,
    pub sector: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

impl CreateCompanyInput {
    pub fn validate(self) -> Result<NewCompany, ServiceError> {
        let mut out = Vec::new();
        let name = validation::required_string(&mut out, "name", self.name, 1, 100);
        let cnpj = validation::required_string(&mut out, "cnpj", self.cnpj, 1, 20);
        let sector = validation::required_string(&mut out, "sector", self.sector, 1, 100);
        let (city, state) = match self.address {
            None => {
                out.push(FieldViolation::required("address"));
                (None, None)
            }
            Some(a) => (
                validation::required_string(&mut out, "address.city", a.city, 1, 100),
                validation::required_string(&mut out, "address.state", a.state, 1, 100),
            ),
        };

        match (name, cnpj, sector, city, state) {
            (Some(name), Some(cnpj), Some(sector), Some(city), Some(state)) if out.is_empty() => {
                Ok(NewCompany { name, cnpj, sector, city, state })
            }
            _ => Err(ServiceError::Validation(out)),
        }
    }
}

impl UpdateCompanyInput {
    pub fn validate(self) -> Result<CompanyPatch, ServiceError> {
        let mut out = Vec::new();
        let name = validation::optional_string(&mut out, "name", self.name, 1, 100);
        let sector = validation::optional_string(&mut out, "sector", self.sector, 1, 100);
        // A present address must be complete; a missing one is untouched.
        let (city, state) = match self.address {
            None => (None, None),
            Some(a) => (
                validation::required_string(&mut out, "address.city", a.city, 1, 100),
                validation::required_string(&mut out, "address.state", a.state, 1, 100),
            ),
        };

        if out.is_empty() {
            Ok(CompanyPatch { name, sector, city, state })
        } else {
            Err(ServiceError::Validation(out))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> CreateCompanyInput {
        serde_json::from_value(serde_json::json!({
            "name": "Tech Solutions",
            "cnpj": "12345678000199",
            "sector": "Technology",
            "address": {"city": "São Paulo", "state": "SP"}
        }))
        .unwrap()
    }

    #[test]
    fn valid_creation_passes() {
        let new = valid_input().validate().unwrap();
        assert_eq!(new.cnpj, "12345678000199");
        assert_eq!(new.city, "São Paulo");
    }

    #[test]
    fn violations_are_collected_not_short_circuited() {
        let input: CreateCompanyInput = serde_json::from_value(serde_json::json!({
            "name": "", "sector": "IT"
        }))
        .unwrap();
        let Err(ServiceError::Validation(fields)) = input.validate() else {
            panic!("expected validation failure");
        };
        let paths: Vec<_> = fields.iter().map(|f| f.path.as_str()).collect();
        assert!(paths.contains(&"name"));
        assert!(paths.contains(&"cnpj"));
        assert!(paths.contains(&"address"));
    }

    #[test]
    fn nested_address_paths_are_dotted() {
        let input: CreateCompanyInput = serde_json::from_value(serde_json::json!({
            "name": "Co", "cnpj": "1", "sector": "IT", "address": {"city": "SP"}
        }))
        .unwrap();
        let Err(ServiceError::Validation(fields)) = input.validate() else {
            panic!("expected validation failure");
        };
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].path, "address.state");
    }

    #[test]
    fn strings_are_trimmed() {
        let mut input = valid_input();
        input.name = Some("  Tech Solutions  ".into());
        assert_eq!(input.validate().unwrap().name, "Tech Solutions");
    }

    #[test]
    fn update_ignores_cnpj_in_raw_payload() {
        let input: UpdateCompanyInput = serde_json::from_value(serde_json::json!({
            "cnpj": "00000000000000",
            "name": "Updated Name"
        }))
        .unwrap();
        let patch = input.validate().unwrap();
        assert_eq!(patch.name.as_deref(), Some("Updated Name"));
        // no cnpj field exists on the patch to begin with
    }

    #[test]
    fn empty_update_is_valid() {
        let patch = UpdateCompanyInput::default().validate().unwrap();
        assert!(patch.name.is_none() && patch.sector.is_none());
    }

    #[test]
    fn partial_address_in_update_fails() {
        let input: UpdateCompanyInput = serde_json::from_value(serde_json::json!({
            "address": {"state": "SP"}
        }))
        .unwrap();
        assert!(input.validate().is_err());
    }
}
