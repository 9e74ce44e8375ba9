//! Scope type.
//!
//! The (project, environment, module) triple that narrows which entries are
//! visible. Each dimension may hold the sentinel [`DEFAULT_SCOPE`], meaning
//! "match anything" when filtering.

use serde::{Deserialize, Serialize};

use crate::core::constants::DEFAULT_SCOPE;
use crate::error::{Result, ValidationError};

/// A lookup or storage scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scope {
    pub project: String,
    pub environment: String,
    pub module: String,
}

impl Scope {
    /// Create a scope from its three dimensions.
    pub fn new(
        project: impl Into<String>,
        environment: impl Into<String>,
        module: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            environment: environment.into(),
            module: module.into(),
        }
    }

    /// Project filter, or `None` when unconstrained.
    pub fn project_filter(&self) -> Option<&str> {
        constrained(&self.project)
    }

    /// Environment filter, or `None` when unconstrained.
    pub fn environment_filter(&self) -> Option<&str> {
        constrained(&self.environment)
    }

    /// Module filter, or `None` when unconstrained.
    pub fn module_filter(&self) -> Option<&str> {
        constrained(&self.module)
    }

    /// True if every dimension is the sentinel.
    pub fn is_unscoped(&self) -> bool {
        self.project_filter().is_none()
            && self.environment_filter().is_none()
            && self.module_filter().is_none()
    }

    /// Whether an entry stored under `other` is visible through this scope.
    pub fn contains(&self, other: &Scope) -> bool {
        fn dim(filter: Option<&str>, value: &str) -> bool {
            filter.map_or(true, |f| f == value)
        }
        dim(self.project_filter(), &other.project)
            && dim(self.environment_filter(), &other.environment)
            && dim(self.module_filter(), &other.module)
    }

    /// Reject empty dimension values.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyScope` naming the first empty dimension.
    pub fn validate(&self) -> Result<()> {
        for (dimension, value) in [
            ("project", &self.project),
            ("environment", &self.environment),
            ("module", &self.module),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::EmptyScope { dimension }.into());
            }
        }
        Ok(())
    }
}

fn constrained(value: &str) -> Option<&str> {
    (value != DEFAULT_SCOPE).then_some(value)
}

impl Default for Scope {
    fn default() -> Self {
        Self::new(DEFAULT_SCOPE, DEFAULT_SCOPE, DEFAULT_SCOPE)
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "project={} env={} module={}",
            self.project, self.environment, self.module
        )
    }
}
