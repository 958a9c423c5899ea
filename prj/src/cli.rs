use clap::{Parser, Subcommand};
use prj_core::{FileKind, Var};

/// prj - resolve project base directories (PRJ_ROOT, PRJ_CONFIG_HOME, ...)
#[derive(Parser, Debug)]
#[command(name = "prj")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show every resolved project variable
    Show {
        /// Output as JSON instead of NAME=value lines
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Print a single resolved value
    ///
    /// Examples:
    ///   prj get root
    ///   prj get cache-home
    ///   prj get PRJ_DATA_HOME
    Get {
        /// root, id, config-home, runtime-dir, cache-home, data-home, state-home or path
        #[arg(value_name = "VAR")]
        var: Var,
    },

    /// Print shell export statements
    ///
    /// Examples:
    ///   eval "$(prj env)"
    Env,

    /// Create the parent directories of a file under a project home and print its path
    ///
    /// Examples:
    ///   prj file data app/db.sqlite
    ///   prj file runtime server.sock
    File {
        /// config, data, state, cache or runtime
        #[arg(value_name = "KIND")]
        kind: FileKind,

        /// Path relative to the home directory
        #[arg(value_name = "REL_PATH")]
        rel_path: String,
    },

    /// Print the path of an existing file under a project home
    Find {
        /// config, data, state, cache or runtime
        #[arg(value_name = "KIND")]
        kind: FileKind,

        /// Path relative to the home directory
        #[arg(value_name = "REL_PATH")]
        rel_path: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_get() {
        let cli = Cli::try_parse_from(["prj", "get", "PRJ_CACHE_HOME"]).unwrap();
        assert!(matches!(cli.command, Commands::Get { var: Var::CacheHome }));
    }

    #[test]
    fn test_parse_file() {
        let cli = Cli::try_parse_from(["prj", "file", "data", "app/db.sqlite"]).unwrap();
        match cli.command {
            Commands::File { kind, rel_path } => {
                assert_eq!(kind, FileKind::Data);
                assert_eq!(rel_path, "app/db.sqlite");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unknown_kind() {
        assert!(Cli::try_parse_from(["prj", "file", "bin", "x"]).is_err());
        assert!(Cli::try_parse_from(["prj", "get", "home"]).is_err());
    }

    #[test]
    fn test_show_json_flag() {
        let cli = Cli::try_parse_from(["prj", "show", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Show { json: true }));
    }
}
