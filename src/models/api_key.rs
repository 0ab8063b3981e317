//! API key model and key-management request/response types.
//!
//! API keys authenticate callers of the chatbot API. Only the SHA-256 hash of
//! a key is ever stored; the raw secret is returned exactly once at issuance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The full permission set granted when a generate request names none.
pub const DEFAULT_PERMISSIONS: [&str; 4] = ["chat", "projects", "skills", "recommendations"];

/// A stored API key record.
///
/// # Storage
///
/// Records live in the key store file as a map of `key_hash` → record.
/// The raw secret is never stored anywhere:
/// 1. At issuance the secret is hashed with SHA-256 and the hash becomes the storage key
/// 2. At validation the presented secret is hashed the same way and looked up
/// 3. If found, active, and unexpired, the request is authenticated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiKeyRecord {
    /// Unique identifier for this key (generated, not secret)
    pub key_id: Uuid,

    /// SHA-256 hash of the actual API key (64 hex characters)
    pub key_hash: String,

    /// Human-readable name for this key
    pub name: String,

    /// Free-text description of the key's purpose
    pub description: String,

    /// Timestamp when this key was created (immutable)
    pub created_at: DateTime<Utc>,

    /// Optional expiry timestamp; `None` means the key never expires
    ///
    /// Expiry is evaluated live at validation time. An expired key keeps
    /// `is_active == true` but never validates.
    pub expires_at: Option<DateTime<Utc>>,

    /// Whether this key is currently active
    ///
    /// Set to false on revocation and never reset to true. This provides a
    /// way to withdraw access without deleting the record.
    pub is_active: bool,

    /// Named capabilities this key grants (e.g. "chat", "projects")
    pub permissions: Vec<String>,

    /// Number of successful validations of this key
    pub usage_count: u64,

    /// Timestamp of the most recent successful validation
    pub last_used_at: Option<DateTime<Utc>>,
}

impl ApiKeyRecord {
    /// Whether the key's expiry timestamp, if any, has passed.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| now > expires_at)
    }

    /// Whether the key grants the named permission.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }
}

/// Public view of an API key record.
///
/// Returned by the key listing endpoint. Excludes `key_hash` (and of course
/// the secret, which is not recoverable from any query).
#[derive(Debug, Clone, Serialize)]
pub struct ApiKeySummary {
    /// Key unique identifier
    pub key_id: Uuid,

    /// Key name
    pub name: String,

    /// Key description
    pub description: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Expiry timestamp, if any
    pub expires_at: Option<DateTime<Utc>>,

    /// Whether the key is active
    pub is_active: bool,

    /// Granted permissions
    pub permissions: Vec<String>,

    /// Successful validation count
    pub usage_count: u64,

    /// Most recent successful validation
    pub last_used_at: Option<DateTime<Utc>>,
}

/// Convert a stored ApiKeyRecord to its public summary.
///
/// This transformation removes the internal `key_hash` field.
impl From<ApiKeyRecord> for ApiKeySummary {
    fn from(record: ApiKeyRecord) -> Self {
        Self {
            key_id: record.key_id,
            name: record.name,
            description: record.description,
            created_at: record.created_at,
            expires_at: record.expires_at,
            is_active: record.is_active,
            permissions: record.permissions,
            usage_count: record.usage_count,
            last_used_at: record.last_used_at,
        }
    }
}

/// Aggregate statistics over the whole registry.
///
/// `expired_keys` is a derived status computed against the current time,
/// not a stored flag.
#[derive(Debug, Clone, Serialize)]
pub struct KeyStats {
    /// Total records, active or not
    pub total_keys: usize,

    /// Records with `is_active == true`
    pub active_keys: usize,

    /// Records whose expiry timestamp has passed
    pub expired_keys: usize,

    /// Sum of all usage counters
    pub total_usage: u64,
}

/// Request body for generating a new API key.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "Portfolio site",
///   "description": "Key for the public portfolio frontend",
///   "expires_in_days": 365,
///   "permissions": ["chat", "projects"]
/// }
/// ```
///
/// # Validation
///
/// - `name`: Required, non-empty
/// - `description`: Optional, defaults to empty
/// - `expires_in_days`: Optional, defaults to 365; `null` is accepted and
///   means no expiry
/// - `permissions`: Optional, defaults to the full permission set
#[derive(Debug, Deserialize)]
pub struct GenerateKeyRequest {
    /// Display name for the new key
    pub name: String,

    /// Description of the key's purpose
    #[serde(default)]
    pub description: String,

    /// Days until the key expires (defaults to 365 if the field is absent)
    #[serde(default = "default_expires_in_days")]
    pub expires_in_days: Option<u32>,

    /// Permissions for the new key (defaults to the full set if absent)
    #[serde(default = "default_permissions")]
    pub permissions: Vec<String>,
}

/// Default expiry when the request does not mention one.
fn default_expires_in_days() -> Option<u32> {
    Some(365)
}

/// Default permission set when the request does not mention one.
fn default_permissions() -> Vec<String> {
    DEFAULT_PERMISSIONS.iter().map(|p| p.to_string()).collect()
}

/// Response body for a freshly generated API key.
///
/// This is the only place the raw secret ever appears; it cannot be
/// recovered later, so callers must save it out-of-band.
#[derive(Debug, Serialize)]
pub struct GenerateKeyResponse {
    /// The raw bearer secret (shown exactly once)
    pub api_key: String,

    /// Identifier of the new key
    pub key_id: Uuid,

    /// Key name as stored
    pub name: String,

    /// Key description as stored
    pub description: String,

    /// Expiry timestamp, if any
    pub expires_at: Option<DateTime<Utc>>,

    /// Granted permissions
    pub permissions: Vec<String>,

    /// Always "success"
    pub status: String,

    /// Reminder that the secret is shown only once
    pub message: String,
}

/// Request body for revoking an API key.
#[derive(Debug, Deserialize)]
pub struct RevokeKeyRequest {
    /// The raw secret of the key to revoke
    pub api_key: String,
}

/// Response body for the key listing endpoint.
#[derive(Debug, Serialize)]
pub struct ListKeysResponse {
    /// Public summaries of every record
    pub keys: Vec<ApiKeySummary>,

    /// Aggregate statistics
    pub stats: KeyStats,

    /// Always "success"
    pub status: String,
}
