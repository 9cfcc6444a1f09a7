use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

/// A registered organization.
///
/// A `Company` only exists once it has been registered, so it always
/// carries its `ID` and its `CompanyRegistration`. Neither is ever
/// changed after registration.
#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    pub id: ID,
    pub name: Option<String>,
    /// Website of the company
    pub link: Option<String>,
    pub mission_statement: Option<String>,
    /// Path or url to the company logo
    pub logo: Option<String>,
    pub registration: CompanyRegistration,
}

impl Entity for Company {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// Metadata stamped on a `Company` at the moment it is registered
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyRegistration {
    /// Registration time formatted as `yyyy-MM-dd HH:mm:ss`
    pub date: String,
    pub status: RegistrationStatus,
}

impl CompanyRegistration {
    pub fn new(date: String) -> Self {
        Self {
            date,
            status: Default::default(),
        }
    }
}

// Only `Accepted` is ever assigned. `Declined` and `None` are part of the
// stored vocabulary but nothing transitions a registration into them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RegistrationStatus {
    Accepted,
    Declined,
    None,
}

impl Default for RegistrationStatus {
    fn default() -> Self {
        Self::Accepted
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn registration_defaults_to_accepted() {
        let registration = CompanyRegistration::new("2021-03-14 09:26:53".into());
        assert_eq!(registration.status, RegistrationStatus::Accepted);
        assert_eq!(registration.date, "2021-03-14 09:26:53");
    }

    #[test]
    fn companies_are_equal_entities_by_id() {
        let company = Company {
            id: ID::new(),
            name: Some("Acme".into()),
            link: None,
            mission_statement: None,
            logo: None,
            registration: CompanyRegistration::new("2021-03-14 09:26:53".into()),
        };
        let mut renamed = company.clone();
        renamed.name = Some("Acme Inc".into());
        assert!(Entity::eq(&company, &renamed));

        let other = Company {
            id: ID::new(),
            ..company.clone()
        };
        assert!(!Entity::eq(&company, &other));
    }
}
