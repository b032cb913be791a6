use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Role held by field agents.
pub const ROLE_AGENT: &str = "PMT Agente";
/// Role held by the municipal traffic court.
pub const ROLE_COURT: &str = "PMT Juzgado";
/// Role that may select any preset.
pub const ROLE_ADMIN: &str = "PMT Administrador";

/// The roles the acting user holds, supplied by the host session. The core
/// never consults any ambient identity mechanism.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoleSet(HashSet<String>);

impl RoleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, role: &str) -> bool {
        self.0.contains(role)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn insert(&mut self, role: impl Into<String>) {
        self.0.insert(role.into());
    }

    /// True when the set holds at least one role the gate recognizes.
    pub fn has_known_role(&self) -> bool {
        [ROLE_AGENT, ROLE_COURT, ROLE_ADMIN]
            .iter()
            .any(|role| self.contains(role))
    }
}

impl<S: Into<String>> FromIterator<S> for RoleSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
