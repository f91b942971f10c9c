//! Typed handles for host-owned objects
//!
//! The host owns its object graph; callers hold opaque, copyable handles.
//! Handles are UUID-backed and minted by whoever implements the host side.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Handle to a host request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestRef(Uuid);

impl RequestRef {
    /// Mints a fresh handle.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for RequestRef {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a host request group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupRef(Uuid);

impl GroupRef {
    /// Mints a fresh handle.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for GroupRef {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to an environment domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DomainRef(Uuid);

impl DomainRef {
    /// Mints a fresh handle.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for DomainRef {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to an environment inside a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnvironmentRef(Uuid);

impl EnvironmentRef {
    /// Mints a fresh handle.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for EnvironmentRef {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to an environment variable.
///
/// Its UUID is what environment-variable dynamic values embed as the
/// `environmentVariable` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariableRef(Uuid);

impl VariableRef {
    /// Mints a fresh handle.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for VariableRef {
    fn default() -> Self {
        Self::new()
    }
}
