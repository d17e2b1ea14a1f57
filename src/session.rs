//! Signed-in user context handed to the table host.
//!
//! A [`Session`] is built once from settings and passed down explicitly. It
//! is never looked up globally and never mutated after construction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Dashboard role of the signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
	Admin,
	Vendor,
	Corporate,
	Agent,
	#[default]
	Guest,
}

impl Role {
	pub const ALL: [Role; 5] = [
		Role::Admin,
		Role::Vendor,
		Role::Corporate,
		Role::Agent,
		Role::Guest,
	];

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Role::Admin => "admin",
			Role::Vendor => "vendor",
			Role::Corporate => "corporate",
			Role::Agent => "agent",
			Role::Guest => "guest",
		}
	}
}

impl fmt::Display for Role {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Role {
	type Err = String;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let normalized = value.trim().to_ascii_lowercase();
		Role::ALL
			.into_iter()
			.find(|role| role.as_str() == normalized)
			.ok_or_else(|| {
				let names = Role::ALL.map(Role::as_str).join(", ");
				format!("expected one of {names}")
			})
	}
}

/// Read-only context of the signed-in user.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Session {
	user: Option<String>,
	role: Role,
	token: Option<String>,
}

impl Session {
	#[must_use]
	pub fn new(user: Option<String>, role: Role, token: Option<String>) -> Self {
		Self {
			user: user.filter(|user| !user.trim().is_empty()),
			role,
			token: token.filter(|token| !token.is_empty()),
		}
	}

	#[must_use]
	pub fn user(&self) -> Option<&str> {
		self.user.as_deref()
	}

	#[must_use]
	pub fn role(&self) -> Role {
		self.role
	}

	#[must_use]
	pub fn token(&self) -> Option<&str> {
		self.token.as_deref()
	}

	#[must_use]
	pub fn is_signed_in(&self) -> bool {
		self.user.is_some()
	}

	/// Short label such as `ops@fleet (admin)`, or `None` when nobody is signed in.
	#[must_use]
	pub fn label(&self) -> Option<String> {
		self.user
			.as_ref()
			.map(|user| format!("{user} ({})", self.role))
	}
}

// The token never reaches logs or `--print-config` output.
impl fmt::Debug for Session {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Session")
			.field("user", &self.user)
			.field("role", &self.role)
			.field("token", &self.token.as_ref().map(|_| "<redacted>"))
			.finish()
	}
}
