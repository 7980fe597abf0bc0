// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Activities live in the `activities` collection, one document per
//! activity keyed by its ID.

use crate::db::{collections, StoreError};
use crate::models::{Activity, Visibility};
use crate::search::AccessPredicate;

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, StoreError> {
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id).await.map_err(|e| {
            StoreError::Firestore(format!("Failed to connect to Firestore: {}", e))
        })?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, StoreError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            StoreError::Firestore(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return [`StoreError::Offline`].
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    fn get_client(&self) -> Result<&firestore::FirestoreDb, StoreError> {
        self.client.as_ref().ok_or(StoreError::Offline)
    }

    // ─── Activity Operations ─────────────────────────────────────

    /// Fetch every activity the predicate admits.
    ///
    /// Owners are stored either inline (`owner`) or as a reference wrapper
    /// (`owner.id`), so the owner branch checks both paths.
    pub async fn find_visible_activities(
        &self,
        predicate: &AccessPredicate,
    ) -> Result<Vec<Activity>, StoreError> {
        let public = Visibility::Public.as_str();
        let user_id = predicate.user_id().map(str::to_string);

        let activities: Vec<Activity> = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::ACTIVITIES)
            .filter(move |q| match &user_id {
                Some(user_id) => q.for_any([
                    q.field("visibility").eq(public),
                    q.field("owner").eq(user_id.as_str()),
                    q.field("owner.id").eq(user_id.as_str()),
                ]),
                None => q.for_all([q.field("visibility").eq(public)]),
            })
            .obj()
            .query()
            .await
            .map_err(|e| StoreError::Firestore(e.to_string()))?;

        tracing::debug!(
            count = activities.len(),
            authenticated = predicate.user_id().is_some(),
            "Fetched visible activities"
        );

        Ok(activities)
    }

    /// Get an activity by ID.
    pub async fn get_activity(&self, activity_id: &str) -> Result<Option<Activity>, StoreError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::ACTIVITIES)
            .obj()
            .one(activity_id)
            .await
            .map_err(|e| StoreError::Firestore(e.to_string()))
    }

    /// Create or replace an activity.
    pub async fn set_activity(&self, activity: &Activity) -> Result<(), StoreError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::ACTIVITIES)
            .document_id(&activity.id)
            .object(activity)
            .execute()
            .await
            .map_err(|e| StoreError::Firestore(e.to_string()))?;
        Ok(())
    }

    /// Delete an activity.
    pub async fn delete_activity(&self, activity_id: &str) -> Result<(), StoreError> {
        self.get_client()?
            .fluent()
            .delete()
            .from(collections::ACTIVITIES)
            .document_id(activity_id)
            .execute()
            .await
            .map_err(|e| StoreError::Firestore(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_offline_client_reports_offline() {
        let db = FirestoreDb::new_mock();

        let err = db
            .find_visible_activities(&AccessPredicate::public_only())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Offline));

        let err = db.get_activity("a1").await.unwrap_err();
        assert!(matches!(err, StoreError::Offline));
    }
}
