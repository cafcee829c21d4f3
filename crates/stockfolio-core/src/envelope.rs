use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::ValidationError;

/// Standard response envelope for all `stockfolio` machine-readable
/// outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub meta: EnvelopeMeta,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn success(meta: EnvelopeMeta, data: T) -> Self {
        Self { meta, data }
    }
}

/// Metadata attached to every envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeMeta {
    pub request_id: String,
    pub schema_version: String,
    pub generated_at: String,
    pub latency_ms: u64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl EnvelopeMeta {
    pub fn new(
        request_id: impl Into<String>,
        schema_version: impl Into<String>,
        latency_ms: u64,
    ) -> Result<Self, ValidationError> {
        let meta = Self {
            request_id: request_id.into(),
            schema_version: schema_version.into(),
            generated_at: OffsetDateTime::now_utc()
                .format(&Rfc3339)
                .unwrap_or_else(|_| String::from("<unformattable>")),
            latency_ms,
            warnings: Vec::new(),
        };
        meta.validate()?;
        Ok(meta)
    }

    pub fn push_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.request_id.trim().len() < 8 {
            return Err(ValidationError::InvalidRequestId);
        }

        if !is_valid_schema_version(&self.schema_version) {
            return Err(ValidationError::InvalidSchemaVersion {
                value: self.schema_version.clone(),
            });
        }

        Ok(())
    }
}

fn is_valid_schema_version(value: &str) -> bool {
    let Some(version) = value.strip_prefix('v') else {
        return false;
    };

    let mut parts = version.split('.');
    let major = parts.next();
    let minor = parts.next();
    let patch = parts.next();

    if parts.next().is_some() {
        return false;
    }

    [major, minor, patch].iter().all(|part| {
        part.is_some_and(|segment| {
            !segment.is_empty() && segment.chars().all(|ch| ch.is_ascii_digit())
        })
    })
}
