use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for the `mrd` binary.
#[derive(Debug, Parser)]
#[command(name = "mrd", version, about = "Meridian - hospital data model schemas")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Inspect and export registered JSON Schemas.
    Schema {
        #[command(subcommand)]
        action: SchemaCommands,
    },
    /// Validate a JSON payload against a registered schema.
    Validate(ValidateArgs),
}

#[derive(Clone, Debug, Subcommand)]
pub enum SchemaCommands {
    /// List all registered schema keys.
    List,
    /// Print one schema as JSON.
    Show {
        /// Schema key: a model name (`patient`) or `model.kind` (`patient.where`).
        key: String,
    },
    /// Write every schema to a directory, one JSON file per key.
    Export {
        /// Output directory (defaults to `export.dir` from config).
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

#[derive(Clone, Debug, Args)]
pub struct ValidateArgs {
    /// Model name (`patient`, `user`, ...).
    #[arg(long)]
    pub model: String,

    /// Input kind (`where`, `create`, ...). Omit to validate against the
    /// entity shape.
    #[arg(long)]
    pub kind: Option<String>,

    /// JSON file to validate (reads stdin if omitted).
    pub file: Option<PathBuf>,
}

impl ValidateArgs {
    /// Registry key addressed by these arguments.
    #[must_use]
    pub fn key(&self) -> String {
        match &self.kind {
            Some(kind) => format!("{}.{kind}", self.model),
            None => self.model.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, SchemaCommands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn schema_show_takes_a_key() {
        let cli = Cli::try_parse_from(["mrd", "schema", "show", "patient.where"])
            .expect("cli should parse");
        match cli.command {
            Commands::Schema {
                action: SchemaCommands::Show { key },
            } => assert_eq!(key, "patient.where"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn validate_builds_registry_key() {
        let cli = Cli::try_parse_from([
            "mrd", "validate", "--model", "patient", "--kind", "create", "input.json",
        ])
        .expect("cli should parse");
        let Commands::Validate(args) = cli.command else {
            panic!("expected validate command");
        };
        assert_eq!(args.key(), "patient.create");
        assert_eq!(args.file.as_deref().unwrap().to_str(), Some("input.json"));
    }

    #[test]
    fn validate_without_kind_targets_entity_shape() {
        let cli = Cli::try_parse_from(["mrd", "validate", "--model", "patient"])
            .expect("cli should parse");
        let Commands::Validate(args) = cli.command else {
            panic!("expected validate command");
        };
        assert_eq!(args.key(), "patient");
        assert!(args.file.is_none());
    }

    #[test]
    fn validate_requires_a_model() {
        let parsed = Cli::try_parse_from(["mrd", "validate"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["mrd", "schema", "list", "--verbose"])
            .expect("cli should parse");
        assert!(cli.verbose);
        assert!(!cli.quiet);
    }
}
