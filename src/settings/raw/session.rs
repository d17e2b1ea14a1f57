use fleetdesk::{Role, Session};
use serde::Deserialize;

use super::super::resolved::{ConfigError, ConfigSources};

/// `[session]`: who is signed in.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SessionSection {
	pub(super) user: Option<String>,
	pub(super) role: Option<String>,
	pub(super) token: Option<String>,
}

impl std::fmt::Debug for SessionSection {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SessionSection")
			.field("user", &self.user)
			.field("role", &self.role)
			.field("token", &self.token.as_ref().map(|_| "<redacted>"))
			.finish()
	}
}

impl SessionSection {
	pub(super) fn finalize(self, sources: &ConfigSources) -> Result<Session, ConfigError> {
		let role = match self.role {
			Some(value) => value.parse::<Role>().map_err(|reason| {
				ConfigError::invalid("session.role", value.clone(), sources.source_for_role(), reason)
			})?,
			None => Role::Guest,
		};
		Ok(Session::new(self.user, role, self.token))
	}
}
