//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Flatten frontmatter and inline referenced content objects
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: weft.toml, searched upward)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a commented weft.toml
    #[command(visible_alias = "i")]
    Init {
        /// Directory to write weft.toml into (default: current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        dir: Option<PathBuf>,

        /// Print the template to stdout instead of writing it
        #[arg(long)]
        dry: bool,
    },

    /// Flatten and resolve an object set, writing the objects back out
    #[command(visible_alias = "r")]
    Resolve {
        #[command(flatten)]
        io: IoArgs,

        #[command(flatten)]
        pipeline: PipelineArgs,

        /// Fail without writing output when a reference is broken
        #[arg(long)]
        strict: bool,
    },

    /// Flatten, resolve and assemble page entries
    #[command(visible_alias = "p")]
    Pages {
        #[command(flatten)]
        io: IoArgs,

        #[command(flatten)]
        pipeline: PipelineArgs,
    },

    /// Report broken, depth-limited and cyclic references
    #[command(visible_alias = "c")]
    Check {
        /// Object set to check (JSON array). `-` or omitted reads stdin
        #[arg(value_hint = clap::ValueHint::FilePath)]
        input: Option<PathBuf>,

        #[command(flatten)]
        pipeline: PipelineArgs,

        /// Treat broken references as warnings instead of errors
        #[arg(long, short = 'w')]
        warn_only: bool,
    },

    /// Print the URL derived from source-relative paths
    #[command(visible_alias = "u")]
    Url {
        /// Paths relative to the content source, e.g. `blog/hello.md`
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

/// Input and output of commands that write JSON.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct IoArgs {
    /// Object set to read (JSON array). `-` or omitted reads stdin
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

/// Overrides of weft.toml shared by the pipeline commands.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct PipelineArgs {
    /// Fields that may hold references (comma-separated, repeatable)
    #[arg(short, long = "field", value_name = "NAME", value_delimiter = ',')]
    pub fields: Option<Vec<String>>,

    /// Maximum substitutions chained along one branch
    #[arg(short = 'd', long)]
    pub max_depth: Option<usize>,

    /// Flatten frontmatter before resolving
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub flatten: Option<bool>,

    /// sourceName of page objects
    #[arg(long)]
    pub source: Option<String>,

    /// Id of the site-wide data object
    #[arg(long)]
    pub site_id: Option<String>,
}

#[allow(unused)]
impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
    pub const fn is_url(&self) -> bool {
        matches!(self.command, Commands::Url { .. })
    }
}

impl Commands {
    /// Pipeline overrides carried by the command, if any.
    pub fn pipeline_args(&self) -> Option<&PipelineArgs> {
        match self {
            Commands::Resolve { pipeline, .. }
            | Commands::Pages { pipeline, .. }
            | Commands::Check { pipeline, .. } => Some(pipeline),
            Commands::Init { .. } | Commands::Url { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_resolve() {
        let cli = Cli::parse_from([
            "weft", "resolve", "objects.json", "-o", "out.json", "--field", "author,category",
            "--max-depth", "3", "--strict",
        ]);
        let Commands::Resolve { io, pipeline, strict } = &cli.command else {
            panic!("expected resolve");
        };

        assert_eq!(io.input.as_deref(), Some(std::path::Path::new("objects.json")));
        assert_eq!(io.output.as_deref(), Some(std::path::Path::new("out.json")));
        assert_eq!(
            pipeline.fields.as_deref(),
            Some(&["author".to_string(), "category".to_string()][..])
        );
        assert_eq!(pipeline.max_depth, Some(3));
        assert!(*strict);
    }

    #[test]
    fn test_flatten_flag_forms() {
        let bare = Cli::parse_from(["weft", "pages", "--flatten"]);
        assert_eq!(bare.command.pipeline_args().unwrap().flatten, Some(true));

        let off = Cli::parse_from(["weft", "pages", "--flatten", "false"]);
        assert_eq!(off.command.pipeline_args().unwrap().flatten, Some(false));

        let unset = Cli::parse_from(["weft", "pages"]);
        assert_eq!(unset.command.pipeline_args().unwrap().flatten, None);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["weft", "check", "-w", "--verbose", "-C", "site/weft.toml"]);
        assert!(cli.verbose);
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("site/weft.toml")));
        assert!(matches!(cli.command, Commands::Check { warn_only: true, .. }));
    }

    #[test]
    fn test_url_requires_paths() {
        assert!(Cli::try_parse_from(["weft", "url"]).is_err());
        assert!(Cli::parse_from(["weft", "url", "a.md"]).is_url());
    }
}
