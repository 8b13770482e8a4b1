use std::sync::Arc;

use sitediary_core::service::DiaryRecordService;

use crate::config::ServerConfig;
use crate::graphql::DiarySchema;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the service holds an `Arc`'d store and the schema is
/// reference counted internally.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Diary record service shared by REST handlers and GraphQL resolvers.
    pub diaries: DiaryRecordService,
    /// GraphQL schema, built over the same service.
    pub schema: DiarySchema,
}

impl AppState {
    pub fn new(config: ServerConfig, diaries: DiaryRecordService) -> Self {
        let schema = crate::graphql::build_schema(diaries.clone());
        Self {
            config: Arc::new(config),
            diaries,
            schema,
        }
    }
}
