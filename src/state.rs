//! Shared application state injected into every handler.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::{AccountService, UrlService};
use crate::config::Config;
use crate::infrastructure::persistence::{
    SqliteSessionRepository, SqliteUrlRepository, SqliteUserRepository,
};
use crate::utils::code_generator::CodeGenerator;
use crate::utils::password::CredentialEngine;

pub type SqliteUrlService = UrlService<SqliteUrlRepository>;
pub type SqliteAccountService = AccountService<SqliteUserRepository, SqliteSessionRepository>;

/// Services wired against one SQLite pool.
///
/// Cloned per request; all fields are cheap handles.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<SqliteUrlService>,
    pub account_service: Arc<SqliteAccountService>,
    pub db: SqlitePool,
}

impl AppState {
    /// Wires repositories and services over `pool`.
    ///
    /// The alias and session-token generators are independent instances,
    /// each with its own configured length.
    pub fn new(
        pool: SqlitePool,
        credentials: CredentialEngine,
        alias_length: usize,
        session_token_length: usize,
    ) -> Self {
        let shared = Arc::new(pool.clone());

        let url_repository = Arc::new(SqliteUrlRepository::new(shared.clone()));
        let user_repository = Arc::new(SqliteUserRepository::new(shared.clone(), credentials));
        let session_repository = Arc::new(SqliteSessionRepository::new(shared));

        Self {
            url_service: Arc::new(UrlService::new(
                url_repository,
                CodeGenerator::new(alias_length),
            )),
            account_service: Arc::new(AccountService::new(
                user_repository,
                session_repository,
                CodeGenerator::new(session_token_length),
            )),
            db: pool,
        }
    }

    /// Builds state from a loaded [`Config`] with default hashing costs.
    pub fn from_config(pool: SqlitePool, config: &Config) -> Self {
        Self::new(
            pool,
            CredentialEngine::default(),
            config.alias_length,
            config.session_token_length,
        )
    }
}
