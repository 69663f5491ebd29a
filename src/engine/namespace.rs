use std::collections::BTreeSet;

/// Decides whether a property namespace belongs to a known top-level command.
pub trait NamespaceValidator {
	fn is_known_namespace(&self, segment: &str) -> bool;
}

/// Registry of the top-level command namespaces of the CLI.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
	commands: BTreeSet<String>,
}

impl CommandRegistry {
	pub fn new<I, S>(commands: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		CommandRegistry {
			commands: commands.into_iter().map(Into::into).collect(),
		}
	}

	/// The namespaces recognised by the `dcos` CLI.
	pub fn dcos() -> Self {
		Self::new(["config", "core", "help", "marathon", "package"])
	}
}

impl NamespaceValidator for CommandRegistry {
	fn is_known_namespace(&self, segment: &str) -> bool {
		self.commands.contains(segment)
	}
}
