//! API key registry.
//!
//! Issues, validates, and revokes bearer credentials, tracks their usage, and
//! persists the whole record set through the key store on every mutation.
//!
//! # Concurrency
//!
//! All records live behind one registry-wide `RwLock`. Validation is not a
//! pure read (it bumps the usage counter and last-used timestamp), so
//! `generate`, `validate`, and `revoke` all take the write lock; `list` and
//! `stats` take the read lock and see snapshot-consistent state.
//!
//! # Persistence ordering
//!
//! Mutations build the updated record set first, persist it, and only then
//! replace the in-memory map. A failed write therefore never leaves memory
//! advanced past what a restart would read back.

use std::collections::HashMap;

use chrono::{Duration, Utc};
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::AppError,
    models::api_key::{ApiKeyRecord, ApiKeySummary, KeyStats},
    store::KeyStore,
};

/// Prefix of every issued secret, for recognizability in logs and configs.
const KEY_PREFIX: &str = "portfolio_";

/// A freshly issued key: the raw secret plus the stored record.
///
/// The secret exists only in this value and in the HTTP response built from
/// it; it is not recoverable from the registry afterwards.
#[derive(Debug)]
pub struct GeneratedKey {
    /// The raw bearer secret
    pub secret: String,

    /// The record as stored (hash, metadata, counters)
    pub record: ApiKeyRecord,
}

/// Registry of API key records keyed by key hash.
#[derive(Debug)]
pub struct ApiKeyRegistry {
    keys: RwLock<HashMap<String, ApiKeyRecord>>,
    store: KeyStore,
}

impl ApiKeyRegistry {
    /// Load the registry from its backing store.
    pub async fn load(store: KeyStore) -> Self {
        let keys = store.load().await;

        Self {
            keys: RwLock::new(keys),
            store,
        }
    }

    /// Number of records currently held.
    pub async fn len(&self) -> usize {
        self.keys.read().await.len()
    }

    /// Whether the registry holds no records at all.
    pub async fn is_empty(&self) -> bool {
        self.keys.read().await.is_empty()
    }

    /// Issue a new API key.
    ///
    /// The secret is 32 random bytes (hex-encoded, behind a fixed prefix) and
    /// only its SHA-256 hash is stored. `expires_in_days: None` means the key
    /// never expires; `Some(0)` produces a key that is born expired.
    ///
    /// The updated registry is persisted before this returns; a storage
    /// failure surfaces as an error and leaves the registry unchanged.
    pub async fn generate(
        &self,
        name: &str,
        description: &str,
        expires_in_days: Option<u32>,
        permissions: Vec<String>,
    ) -> Result<GeneratedKey, AppError> {
        let secret = generate_secret();
        let key_hash = hash_key(&secret);

        let created_at = Utc::now();
        let expires_at = expires_in_days.map(|days| created_at + Duration::days(days as i64));

        let record = ApiKeyRecord {
            key_id: Uuid::new_v4(),
            key_hash: key_hash.clone(),
            name: name.to_string(),
            description: description.to_string(),
            created_at,
            expires_at,
            is_active: true,
            permissions,
            usage_count: 0,
            last_used_at: None,
        };

        let mut keys = self.keys.write().await;

        // Persist first, commit to memory second
        let mut updated = keys.clone();
        updated.insert(key_hash, record.clone());
        self.store.persist(&updated).await?;
        *keys = updated;

        tracing::info!("Generated API key '{}' ({})", record.name, record.key_id);

        Ok(GeneratedKey { secret, record })
    }

    /// Validate a presented secret.
    ///
    /// Returns the record if the key exists, is active, and is not expired;
    /// `None` otherwise. Which of the three failed is deliberately not
    /// reported. A successful validation bumps the usage counter and
    /// last-used timestamp and persists the registry, so this is a mutating
    /// operation.
    pub async fn validate(&self, presented: &str) -> Result<Option<ApiKeyRecord>, AppError> {
        if presented.is_empty() {
            return Ok(None);
        }

        let key_hash = hash_key(presented);
        let now = Utc::now();

        let mut keys = self.keys.write().await;

        let Some(record) = keys.get(&key_hash) else {
            return Ok(None);
        };

        if !record.is_active {
            return Ok(None);
        }

        // Expiry is evaluated live; the record stays active but never validates
        if record.is_expired(now) {
            return Ok(None);
        }

        let mut record = record.clone();
        record.usage_count += 1;
        record.last_used_at = Some(now);

        let mut updated = keys.clone();
        updated.insert(key_hash, record.clone());
        self.store.persist(&updated).await?;
        *keys = updated;

        Ok(Some(record))
    }

    /// Whether a presented secret is valid and grants the named permission.
    ///
    /// Runs a full `validate`, so a permission check counts as a usage event
    /// exactly like any other validation.
    pub async fn has_permission(
        &self,
        presented: &str,
        permission: &str,
    ) -> Result<bool, AppError> {
        let record = self.validate(presented).await?;

        Ok(record.is_some_and(|r| r.has_permission(permission)))
    }

    /// Revoke a key by its secret.
    ///
    /// Deactivation is one-way and idempotent: revoking an already-revoked
    /// key still returns `true` since the record exists. Returns `false` only
    /// for unknown secrets.
    pub async fn revoke(&self, presented: &str) -> Result<bool, AppError> {
        let key_hash = hash_key(presented);

        let mut keys = self.keys.write().await;

        if !keys.contains_key(&key_hash) {
            return Ok(false);
        }

        let mut updated = keys.clone();
        if let Some(record) = updated.get_mut(&key_hash) {
            record.is_active = false;
        }
        self.store.persist(&updated).await?;
        *keys = updated;

        Ok(true)
    }

    /// Public summaries of every record, oldest first.
    ///
    /// Summaries carry all metadata but never the key hash, and the secret is
    /// not reconstructable from anything returned here.
    pub async fn list(&self) -> Vec<ApiKeySummary> {
        let keys = self.keys.read().await;

        let mut summaries: Vec<ApiKeySummary> =
            keys.values().cloned().map(ApiKeySummary::from).collect();
        summaries.sort_by_key(|s| s.created_at);

        summaries
    }

    /// Aggregate statistics over the registry.
    ///
    /// `expired_keys` is computed against the current time, not stored.
    pub async fn stats(&self) -> KeyStats {
        let keys = self.keys.read().await;
        let now = Utc::now();

        KeyStats {
            total_keys: keys.len(),
            active_keys: keys.values().filter(|k| k.is_active).count(),
            expired_keys: keys.values().filter(|k| k.is_expired(now)).count(),
            total_usage: keys.values().map(|k| k.usage_count).sum(),
        }
    }
}

/// SHA-256 hash of a secret, hex-encoded (64 characters).
///
/// The same function is applied at issuance and at validation so the raw
/// secret never needs to be stored.
fn hash_key(key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(key.as_bytes());

    hex::encode(hasher.finalize())
}

/// Generate a cryptographically secure random secret.
///
/// 32 random bytes (256 bits of entropy), hex-encoded behind the service
/// prefix.
fn generate_secret() -> String {
    let bytes: [u8; 32] = rand::random();

    format!("{}{}", KEY_PREFIX, hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_permissions() -> Vec<String> {
        crate::models::api_key::DEFAULT_PERMISSIONS
            .iter()
            .map(|p| p.to_string())
            .collect()
    }

    async fn test_registry(dir: &tempfile::TempDir) -> ApiKeyRegistry {
        ApiKeyRegistry::load(KeyStore::new(dir.path().join("api_keys.json"))).await
    }

    #[tokio::test]
    async fn generate_then_validate_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let registry = test_registry(&dir).await;

        let generated = registry
            .generate("T", "", None, vec!["chat".to_string()])
            .await
            .unwrap();
        assert!(generated.secret.starts_with(KEY_PREFIX));

        let record = registry
            .validate(&generated.secret)
            .await
            .unwrap()
            .expect("freshly generated key should validate");
        assert_eq!(record.permissions, vec!["chat".to_string()]);
        assert_eq!(record.usage_count, 1);
        assert!(record.last_used_at.is_some());

        // Every validation counts
        let record = registry.validate(&generated.secret).await.unwrap().unwrap();
        assert_eq!(record.usage_count, 2);
    }

    #[tokio::test]
    async fn unknown_and_empty_secrets_do_not_validate() {
        let dir = tempfile::tempdir().unwrap();
        let registry = test_registry(&dir).await;

        assert!(registry.validate("").await.unwrap().is_none());
        assert!(
            registry
                .validate("portfolio_not_a_real_key")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn revoke_is_idempotent_and_final() {
        let dir = tempfile::tempdir().unwrap();
        let registry = test_registry(&dir).await;

        let generated = registry
            .generate("T", "", None, full_permissions())
            .await
            .unwrap();

        assert!(registry.revoke(&generated.secret).await.unwrap());
        assert!(registry.validate(&generated.secret).await.unwrap().is_none());

        // Revoking again still reports success; the record exists
        assert!(registry.revoke(&generated.secret).await.unwrap());
        assert!(registry.validate(&generated.secret).await.unwrap().is_none());

        assert!(!registry.revoke("portfolio_unknown").await.unwrap());
    }

    #[tokio::test]
    async fn key_expiring_immediately_fails_validation_while_active() {
        let dir = tempfile::tempdir().unwrap();
        let registry = test_registry(&dir).await;

        let generated = registry
            .generate("T", "", Some(0), full_permissions())
            .await
            .unwrap();

        assert!(registry.validate(&generated.secret).await.unwrap().is_none());

        // Expiry is a live check; the stored record was never deactivated
        let summaries = registry.list().await;
        assert!(summaries[0].is_active);

        let stats = registry.stats().await;
        assert_eq!(stats.expired_keys, 1);
        assert_eq!(stats.active_keys, 1);
    }

    #[tokio::test]
    async fn permission_checks_follow_the_grant_and_revocation() {
        let dir = tempfile::tempdir().unwrap();
        let registry = test_registry(&dir).await;

        let generated = registry
            .generate(
                "default",
                "",
                None,
                vec!["chat".to_string(), "projects".to_string()],
            )
            .await
            .unwrap();
        let secret = &generated.secret;

        assert!(registry.has_permission(secret, "chat").await.unwrap());
        assert!(!registry.has_permission(secret, "skills").await.unwrap());

        assert!(registry.revoke(secret).await.unwrap());
        assert!(!registry.has_permission(secret, "chat").await.unwrap());
    }

    #[tokio::test]
    async fn permission_check_counts_as_a_usage_event() {
        let dir = tempfile::tempdir().unwrap();
        let registry = test_registry(&dir).await;

        let generated = registry
            .generate("T", "", None, full_permissions())
            .await
            .unwrap();

        registry
            .has_permission(&generated.secret, "chat")
            .await
            .unwrap();
        let record = registry.validate(&generated.secret).await.unwrap().unwrap();

        // One for has_permission, one for the validate above
        assert_eq!(record.usage_count, 2);
    }

    #[tokio::test]
    async fn listing_never_exposes_secret_or_hash() {
        let dir = tempfile::tempdir().unwrap();
        let registry = test_registry(&dir).await;

        let generated = registry
            .generate("T", "visible description", None, full_permissions())
            .await
            .unwrap();

        let serialized = serde_json::to_string(&registry.list().await).unwrap();
        assert!(!serialized.contains(&generated.secret));
        assert!(!serialized.contains(&generated.record.key_hash));
        assert!(serialized.contains("visible description"));
    }

    #[tokio::test]
    async fn registry_state_survives_reload_from_the_same_store() {
        let dir = tempfile::tempdir().unwrap();

        let generated = {
            let registry = test_registry(&dir).await;
            let generated = registry
                .generate("persistent", "", None, full_permissions())
                .await
                .unwrap();
            registry.validate(&generated.secret).await.unwrap().unwrap();
            generated
        };

        let reloaded = test_registry(&dir).await;
        let record = reloaded
            .validate(&generated.secret)
            .await
            .unwrap()
            .expect("key should survive a reload");

        assert_eq!(record.name, "persistent");
        // One validation before the reload, one after
        assert_eq!(record.usage_count, 2);
    }

    #[tokio::test]
    async fn stats_aggregate_usage_across_keys() {
        let dir = tempfile::tempdir().unwrap();
        let registry = test_registry(&dir).await;

        let a = registry
            .generate("a", "", None, full_permissions())
            .await
            .unwrap();
        let b = registry
            .generate("b", "", None, full_permissions())
            .await
            .unwrap();

        registry.validate(&a.secret).await.unwrap();
        registry.validate(&a.secret).await.unwrap();
        registry.validate(&b.secret).await.unwrap();
        registry.revoke(&b.secret).await.unwrap();

        let stats = registry.stats().await;
        assert_eq!(stats.total_keys, 2);
        assert_eq!(stats.active_keys, 1);
        assert_eq!(stats.expired_keys, 0);
        assert_eq!(stats.total_usage, 3);
    }
}
