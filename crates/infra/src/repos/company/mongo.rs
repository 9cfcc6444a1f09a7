use super::ICompanyRepo;
use crate::repos::shared::mongo_repo::{self, MongoDocument};
use company_registry_domain::{Company, CompanyRegistration, RegistrationStatus, ID};
use mongodb::{
    bson::{doc, Document},
    Collection, Database,
};
use serde::{Deserialize, Serialize};

pub struct MongoCompanyRepo {
    collection: Collection<CompanyMongo>,
}

impl MongoCompanyRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("companies"),
        }
    }
}

#[async_trait::async_trait]
impl ICompanyRepo for MongoCompanyRepo {
    async fn persist(&self, company: &Company) -> anyhow::Result<()> {
        mongo_repo::upsert::<_, CompanyMongo>(&self.collection, company).await
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Company>> {
        mongo_repo::find_many_by::<_, CompanyMongo>(&self.collection, doc! {}).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompanyMongo {
    #[serde(rename = "_id")]
    id: ID,
    name: Option<String>,
    link: Option<String>,
    mission_statement: Option<String>,
    logo: Option<String>,
    registration: CompanyRegistrationMongo,
}

#[derive(Debug, Serialize, Deserialize)]
struct CompanyRegistrationMongo {
    date: String,
    status: RegistrationStatus,
}

impl MongoDocument<Company> for CompanyMongo {
    fn into_domain(self) -> Company {
        Company {
            id: self.id,
            name: self.name,
            link: self.link,
            mission_statement: self.mission_statement,
            logo: self.logo,
            registration: CompanyRegistration {
                date: self.registration.date,
                status: self.registration.status,
            },
        }
    }

    fn from_domain(company: &Company) -> Self {
        Self {
            id: company.id.clone(),
            name: company.name.clone(),
            link: company.link.clone(),
            mission_statement: company.mission_statement.clone(),
            logo: company.logo.clone(),
            registration: CompanyRegistrationMongo {
                date: company.registration.date.clone(),
                status: company.registration.status,
            },
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": self.id.as_string()
        }
    }
}
