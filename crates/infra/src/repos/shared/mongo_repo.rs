use futures::stream::TryStreamExt;
use mongodb::{bson::Document, options::ReplaceOptions, Collection};
use serde::{de::DeserializeOwned, Serialize};

/// Storage shape of a domain entity `E` in a mongodb collection
pub trait MongoDocument<E>: Serialize + DeserializeOwned + Unpin + Send + Sync {
    fn into_domain(self) -> E;
    fn from_domain(entity: &E) -> Self;
    fn get_id_filter(&self) -> Document;
}

/// Replaces the document with the same id as `entity`, inserting it when missing
pub async fn upsert<E, D: MongoDocument<E>>(
    collection: &Collection<D>,
    entity: &E,
) -> anyhow::Result<()> {
    let raw = D::from_domain(entity);
    let filter = raw.get_id_filter();
    let mut options = ReplaceOptions::default();
    options.upsert = Some(true);
    collection.replace_one(filter, &raw, options).await?;
    Ok(())
}

pub async fn find_many_by<E, D: MongoDocument<E>>(
    collection: &Collection<D>,
    filter: Document,
) -> anyhow::Result<Vec<E>> {
    let cursor = collection.find(filter, None).await?;
    let documents: Vec<D> = cursor.try_collect().await?;

    Ok(documents.into_iter().map(D::into_domain).collect())
}
