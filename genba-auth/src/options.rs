// Authorization options and configuration.

use serde::{Deserialize, Serialize};

use crate::guard::PublicPath;
use crate::principal::PrivilegeLevel;

/// Authorization configuration for one deployment of the suite.
///
/// The demo identities and the fixed tenant id mirror the shipped
/// demo environment; a production deployment replaces them with real
/// identity and tenant resolution.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AuthOptions {
    /// Emails granted SuperAdmin privilege at login.
    pub super_admin_emails: Vec<String>,
    /// Emails granted Admin privilege at login.
    pub admin_emails: Vec<String>,
    /// Tenant id assigned at login. Placeholder integration point:
    /// stands in for a real tenant-resolution service.
    pub default_tenant_id: String,
    /// Where the route guard redirects unauthenticated navigation.
    pub login_path: String,
    /// Paths reachable without a session.
    pub public_paths: Vec<PublicPath>,
}

impl Default for AuthOptions {
    fn default() -> Self {
        Self {
            super_admin_emails: vec!["super@demo.com".to_string()],
            admin_emails: vec!["admin@demo.com".to_string()],
            default_tenant_id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            login_path: "/login".to_string(),
            public_paths: vec![
                PublicPath::Exact("/login".to_string()),
                PublicPath::Exact("/".to_string()),
                PublicPath::Prefix("/api".to_string()),
            ],
        }
    }
}

impl AuthOptions {
    /// Privilege level for an email, per the configured identities.
    /// Super-admin membership wins over admin membership.
    pub fn privilege_for(&self, email: &str) -> PrivilegeLevel {
        if self.super_admin_emails.iter().any(|e| e == email) {
            PrivilegeLevel::SuperAdmin
        } else if self.admin_emails.iter().any(|e| e == email) {
            PrivilegeLevel::Admin
        } else {
            PrivilegeLevel::User
        }
    }

    /// Whether a path is reachable without a session.
    pub fn is_public_path(&self, path: &str) -> bool {
        self.public_paths.iter().any(|p| p.matches(path))
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.login_path.is_empty() || !self.login_path.starts_with('/') {
            return Err("Login path must be a non-empty absolute path".to_string());
        }

        if self.default_tenant_id.trim().is_empty() {
            return Err("Default tenant id cannot be empty".to_string());
        }

        if self.public_paths.is_empty() {
            return Err("At least one public path must be configured".to_string());
        }

        for p in &self.public_paths {
            let raw = match p {
                PublicPath::Exact(s) | PublicPath::Prefix(s) => s,
            };
            if raw.is_empty() || !raw.starts_with('/') {
                return Err(format!("Public path '{raw}' must be a non-empty absolute path"));
            }
        }

        // The guard must be able to land somewhere after a redirect.
        if !self.is_public_path(&self.login_path) {
            return Err("Login path must itself be public".to_string());
        }

        Ok(())
    }

    /// Create a new AuthOptions builder.
    pub fn builder() -> AuthOptionsBuilder {
        AuthOptionsBuilder::new()
    }
}

/// Builder pattern for AuthOptions.
#[derive(Clone, Debug, Default)]
pub struct AuthOptionsBuilder {
    super_admin_emails: Vec<String>,
    admin_emails: Vec<String>,
    default_tenant_id: Option<String>,
    login_path: Option<String>,
    public_paths: Vec<PublicPath>,
}

impl AuthOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn super_admin_email(mut self, email: impl Into<String>) -> Self {
        self.super_admin_emails.push(email.into());
        self
    }

    pub fn admin_email(mut self, email: impl Into<String>) -> Self {
        self.admin_emails.push(email.into());
        self
    }

    pub fn default_tenant_id(mut self, tenant_id: impl Into<String>) -> Self {
        self.default_tenant_id = Some(tenant_id.into());
        self
    }

    pub fn login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = Some(path.into());
        self
    }

    pub fn public_path(mut self, path: PublicPath) -> Self {
        self.public_paths.push(path);
        self
    }

    /// Build the final AuthOptions, falling back to the defaults for
    /// anything not set.
    pub fn build(self) -> AuthOptions {
        let defaults = AuthOptions::default();
        AuthOptions {
            super_admin_emails: if self.super_admin_emails.is_empty() {
                defaults.super_admin_emails
            } else {
                self.super_admin_emails
            },
            admin_emails: if self.admin_emails.is_empty() {
                defaults.admin_emails
            } else {
                self.admin_emails
            },
            default_tenant_id: self.default_tenant_id.unwrap_or(defaults.default_tenant_id),
            login_path: self.login_path.unwrap_or(defaults.login_path),
            public_paths: if self.public_paths.is_empty() {
                defaults.public_paths
            } else {
                self.public_paths
            },
        }
    }

    /// Build and validate.
    pub fn build_validated(self) -> Result<AuthOptions, String> {
        let options = self.build();
        options.validate()?;
        Ok(options)
    }
}
