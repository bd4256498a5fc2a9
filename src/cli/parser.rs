use crate::reader::Delimiter;
use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for psplog
/// CLI application turning PSP++ CSV logs into a plain-text log file
#[derive(Parser)]
#[command(
    name = "psplog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Convert CSV time, defect and object logs into a PSP++ log file",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase diagnostic output (-v info, -vv debug)
    #[arg(global = true, short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Positional paths may be given as `""` to skip a file.
fn path_or_empty(value: &str) -> Result<PathBuf, String> {
    Ok(PathBuf::from(value))
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(short = 'f', long = "force")]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Generate a PSP++ log file from CSV logs
    #[command(group(ArgGroup::new("mode").args(["team", "individual"])))]
    Generate {
        /// Time log CSV
        #[arg(value_parser = path_or_empty)]
        time_file: Option<PathBuf>,

        /// Defect log CSV
        #[arg(value_parser = path_or_empty)]
        defect_file: Option<PathBuf>,

        /// Object log CSV (new and reused objects in one file)
        #[arg(value_parser = path_or_empty)]
        object_file: Option<PathBuf>,

        /// Output file
        #[arg(value_parser = path_or_empty)]
        out_file: Option<PathBuf>,

        /// CSV containing only new objects
        #[arg(long = "new-file", value_name = "FILE")]
        new_file: Option<PathBuf>,

        /// CSV containing only reused objects
        #[arg(long = "reused-file", value_name = "FILE")]
        reused_file: Option<PathBuf>,

        /// Encoding of the input files (e.g. utf-8, latin1)
        #[arg(long = "encoding", value_name = "LABEL")]
        encoding: Option<String>,

        /// Field delimiter; detected from the file when omitted
        #[arg(long = "delimiter", value_enum)]
        delimiter: Option<Delimiter>,

        /// File whose contents replace the generated header
        #[arg(long = "header", value_name = "FILE")]
        header: Option<PathBuf>,

        /// Contributor name used in individual mode
        #[arg(short = 'n', long = "name")]
        name: Option<String>,

        /// Attribute every time and defect row to this contributor,
        /// replacing the file's name column
        #[arg(long = "assign-name", value_name = "NAME")]
        assign_name: Option<String>,

        /// Keep every contributor's records
        #[arg(short = 't', long = "team")]
        team: bool,

        /// Keep only one contributor's records
        #[arg(short = 'i', long = "individual")]
        individual: bool,

        /// Overwrite the output file without asking
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_and_individual_conflict() {
        let res = Cli::try_parse_from(["psplog", "generate", "-t", "-i"]);
        assert!(res.is_err());
    }

    #[test]
    fn positional_files_and_flags() {
        let cli = Cli::try_parse_from([
            "psplog",
            "-vv",
            "generate",
            "time.csv",
            "defects.csv",
            "objects.csv",
            "out.txt",
            "--delimiter",
            "semicolon",
            "-i",
            "-n",
            "Al",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Generate {
            time_file,
            out_file,
            delimiter,
            individual,
            name,
            ..
        } = cli.command
        else {
            panic!("expected generate");
        };
        assert_eq!(time_file, Some(PathBuf::from("time.csv")));
        assert_eq!(out_file, Some(PathBuf::from("out.txt")));
        assert_eq!(delimiter, Some(Delimiter::Semicolon));
        assert!(individual);
        assert_eq!(name.as_deref(), Some("Al"));
    }

    #[test]
    fn empty_positional_is_accepted() {
        let cli = Cli::try_parse_from(["psplog", "generate", "", "d.csv"]).unwrap();
        let Commands::Generate { time_file, .. } = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(time_file, Some(PathBuf::new()));
    }

    #[test]
    fn global_config_after_subcommand() {
        let cli =
            Cli::try_parse_from(["psplog", "config", "--print", "--config", "x.conf"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("x.conf")));
    }
}
