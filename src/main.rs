use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use dcos_config::config::{CONFIG_ENV, load_document, resolve_config_path, save_document};
use dcos_config::engine::{CommandRegistry, PropertyEngine};
use dcos_config::logging;
use dcos_config::property::{ConfigDocument, PropertyPath};
use dcos_config::schema::SchemaValidator;

const CONFIG_INFO: &str = "Get and set DCOS CLI configuration properties";

const CONFIG_USAGE: &str = "\
dcos config --info
       dcos config append <name> <value>
       dcos config prepend <name> <value>
       dcos config set <name> <value>
       dcos config show [<name>]
       dcos config unset [--index=<index>] <name>
       dcos config validate";

#[derive(Parser)]
#[command(name = "dcos")]
#[command(author, version, about = "Command line interface for DCOS")]
#[command(arg_required_else_help = true)]
struct Cli {
	/// Path to the config file [default: ~/.dcos/dcos.toml]
	#[arg(long, global = true, env = CONFIG_ENV, value_name = "PATH")]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Get and set DCOS CLI configuration properties
	#[command(
		override_usage = CONFIG_USAGE,
		disable_version_flag = true,
		arg_required_else_help = true
	)]
	Config(ConfigArgs),
}

#[derive(Args)]
struct ConfigArgs {
	/// Show a short description of this subcommand
	#[arg(long)]
	info: bool,

	/// Show version
	#[arg(long)]
	version: bool,

	#[command(subcommand)]
	action: Option<ConfigAction>,
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Add a value to the end of a list property
	Append {
		/// The name of the property
		name: String,
		/// The value of the property
		#[arg(allow_hyphen_values = true)]
		value: String,
	},
	/// Add a value to the front of a list property
	Prepend {
		/// The name of the property
		name: String,
		/// The value of the property
		#[arg(allow_hyphen_values = true)]
		value: String,
	},
	/// Set a property, inferring its type from the value
	Set {
		/// The name of the property
		name: String,
		/// The value of the property
		#[arg(allow_hyphen_values = true)]
		value: String,
	},
	/// Show one property, or every property when no name is given
	Show {
		/// The name of the property
		name: Option<String>,
	},
	/// Remove a property, or one element of a list property
	Unset {
		/// Index into the list. The first element in the list has an index of zero
		#[arg(long, allow_hyphen_values = true)]
		index: Option<String>,
		/// The name of the property
		name: String,
	},
	/// Check the configuration against the required-property schemas
	Validate,
}

impl ConfigAction {
	fn mutates(&self) -> bool {
		matches!(
			self,
			ConfigAction::Append { .. }
				| ConfigAction::Prepend { .. }
				| ConfigAction::Set { .. }
				| ConfigAction::Unset { .. }
		)
	}
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();
	logging::init();

	match cli.command {
		Commands::Config(args) => handle_config(cli.config.as_deref(), args),
	}
}

fn handle_config(config: Option<&Path>, args: ConfigArgs) -> Result<ExitCode> {
	if args.info {
		println!("{CONFIG_INFO}");
		return Ok(ExitCode::SUCCESS);
	}

	if args.version {
		println!("dcos-config version {}", env!("CARGO_PKG_VERSION"));
		return Ok(ExitCode::SUCCESS);
	}

	let Some(action) = args.action else {
		return Ok(ExitCode::SUCCESS);
	};

	let config_path = resolve_config_path(config).context("Failed to resolve config file path")?;
	let mut document = load_document(&config_path)
		.with_context(|| format!("Failed to load {}", config_path.display()))?;

	let schema = SchemaValidator::builtin().context("Failed to load built-in schemas")?;
	let engine = PropertyEngine::new(CommandRegistry::dcos(), schema);

	match apply_action(&engine, &mut document, &action) {
		Ok(output) => {
			if action.mutates() {
				save_document(&config_path, &document)
					.with_context(|| format!("Failed to write {}", config_path.display()))?;
			}
			if let Some(output) = output {
				println!("{output}");
			}
			Ok(ExitCode::SUCCESS)
		}
		Err(e) if e.is_property_error() => {
			eprintln!("{e}");
			Ok(ExitCode::FAILURE)
		}
		Err(e) => Err(e.into()),
	}
}

fn apply_action(
	engine: &PropertyEngine<CommandRegistry>,
	document: &mut ConfigDocument,
	action: &ConfigAction,
) -> dcos_config::Result<Option<String>> {
	match action {
		ConfigAction::Show { name } => {
			let path = name.as_deref().map(PropertyPath::parse).transpose()?;
			let output = engine.show(document, path.as_ref())?;
			Ok(Some(output).filter(|output| !output.is_empty()))
		}
		ConfigAction::Set { name, value } => {
			engine.set(document, &PropertyPath::parse(name)?, value)?;
			Ok(None)
		}
		ConfigAction::Append { name, value } => {
			engine.append(document, &PropertyPath::parse(name)?, value)?;
			Ok(None)
		}
		ConfigAction::Prepend { name, value } => {
			engine.prepend(document, &PropertyPath::parse(name)?, value)?;
			Ok(None)
		}
		ConfigAction::Unset { name, index } => {
			engine.unset(document, &PropertyPath::parse(name)?, index.as_deref())?;
			Ok(None)
		}
		ConfigAction::Validate => {
			engine.validate(document)?;
			Ok(None)
		}
	}
}
