//! Alias creation, resolution and deletion.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::UrlEntry;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::CodeGenerator;

/// Service for the URL use cases: save, resolve, delete.
///
/// Uniqueness is left entirely to the repository's constraint; the service
/// never checks whether an alias exists before writing.
pub struct UrlService<R: UrlRepository> {
    repository: Arc<R>,
    alias_generator: CodeGenerator,
}

impl<R: UrlRepository> UrlService<R> {
    /// Creates a new URL service.
    ///
    /// `alias_generator` is used only when a save request carries no alias.
    pub fn new(repository: Arc<R>, alias_generator: CodeGenerator) -> Self {
        Self {
            repository,
            alias_generator,
        }
    }

    /// Stores `target` under `alias`, or under a random alias when `alias`
    /// is absent or empty. Returns the alias actually used.
    ///
    /// A random alias is generated once. If it collides the conflict is
    /// returned to the caller as-is.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AliasConflict`] if the alias is taken.
    /// Returns [`AppError::Generation`] if no random alias could be produced.
    /// Returns [`AppError::Store`] on database errors.
    pub async fn save_url(&self, target: &str, alias: Option<&str>) -> Result<String, AppError> {
        let alias = match alias.filter(|a| !a.is_empty()) {
            Some(alias) => alias.to_owned(),
            None => self.alias_generator.generate()?,
        };

        match self.repository.save_url(target, &alias).await {
            Ok(id) => {
                tracing::info!(id, alias = %alias, "url saved");
                Ok(alias)
            }
            Err(e @ AppError::AliasConflict { .. }) => {
                tracing::info!(alias = %alias, "alias already exists");
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    /// Returns the target URL stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias is unknown.
    /// Returns [`AppError::Store`] on database errors.
    pub async fn resolve_url(&self, alias: &str) -> Result<String, AppError> {
        let target = self.repository.get_url(alias).await?;
        tracing::debug!(alias = %alias, target = %target, "alias resolved");
        Ok(target)
    }

    /// Returns the stored entry for `alias`, including its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias is unknown.
    /// Returns [`AppError::Store`] on database errors.
    pub async fn find_entry(&self, alias: &str) -> Result<UrlEntry, AppError> {
        self.repository
            .find_by_alias(alias)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found", json!({ "alias": alias })))
    }

    /// Deletes `alias`. Deleting an unknown alias is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    pub async fn delete_url(&self, alias: &str) -> Result<(), AppError> {
        let removed = self.repository.delete_url(alias).await?;

        if removed {
            tracing::info!(alias = %alias, "url deleted");
        } else {
            tracing::debug!(alias = %alias, "delete of unknown alias ignored");
        }

        Ok(())
    }
}
