mod company;
mod shared;

pub use company::{Company, CompanyRegistration, RegistrationStatus};
pub use shared::entity::{Entity, InvalidIDError, ID};
