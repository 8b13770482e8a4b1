//! GraphQL schema over the diary record service.
//!
//! ```text
//! type Query {
//!   siteDiaries: [SiteDiary!]!
//!   siteDiary(id: String!): SiteDiary
//! }
//! type Mutation {
//!   createSiteDiary(input: SiteDiaryInput!): SiteDiary!
//! }
//! ```

pub mod types;

use async_graphql::{Context, EmptySubscription, ErrorExtensions, Object, Schema, Value};
use sitediary_core::error::CoreError;
use sitediary_core::service::DiaryRecordService;

use crate::error::classify_core_error;
use types::{SiteDiaryInput, SiteDiaryObject};

pub type DiarySchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the service registered as context data.
pub fn build_schema(diaries: DiaryRecordService) -> DiarySchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(diaries)
        .finish()
}

#[derive(Debug, Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every diary entry, full projection, newest date first.
    async fn site_diaries(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<SiteDiaryObject>> {
        let diaries = ctx.data::<DiaryRecordService>()?;
        let records = diaries.list_full().await.map_err(graphql_error)?;
        Ok(records.into_iter().map(SiteDiaryObject::from).collect())
    }

    /// One diary entry by id, or null when there is none.
    async fn site_diary(
        &self,
        ctx: &Context<'_>,
        id: String,
    ) -> async_graphql::Result<Option<SiteDiaryObject>> {
        let diaries = ctx.data::<DiaryRecordService>()?;
        match diaries.get(&id).await {
            Ok(record) => Ok(Some(record.into())),
            Err(CoreError::NotFound { .. }) => Ok(None),
            Err(err) => Err(graphql_error(err)),
        }
    }
}

#[derive(Debug, Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a diary entry.
    async fn create_site_diary(
        &self,
        ctx: &Context<'_>,
        input: SiteDiaryInput,
    ) -> async_graphql::Result<SiteDiaryObject> {
        let diaries = ctx.data::<DiaryRecordService>()?;
        let record = diaries
            .create(&input.into())
            .await
            .map_err(graphql_error)?;
        Ok(record.into())
    }
}

/// Convert a domain error into a GraphQL error carrying `code` (and
/// `fields` for missing required fields) in its extensions.
pub fn graphql_error(err: CoreError) -> async_graphql::Error {
    let parts = classify_core_error(&err);
    async_graphql::Error::new(parts.message).extend_with(|_, ext| {
        ext.set("code", parts.code);
        if let Some(fields) = &parts.fields {
            ext.set(
                "fields",
                Value::List(fields.iter().map(|f| Value::from(*f)).collect()),
            );
        }
    })
}
