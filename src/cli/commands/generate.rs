use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::generate::{GenerateLogic, GenerateRequest};
use crate::errors::{AppError, AppResult};
use crate::reader::Dialect;
use crate::ui::messages::info;
use crate::ui::prompt::{ask_from, is_yes};
use crate::utils::path::expand_tilde;

/// Handle the `generate` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Generate { .. } = cmd {
        let stdin = io::stdin();
        let req = resolve(cmd, cfg, &mut stdin.lock(), &mut io::stdout())?;
        let report = GenerateLogic::run(&req)?;
        tracing::debug!(entries = report.entry_count(), "generate finished");
    }
    Ok(())
}

/// An explicitly empty path means "no file".
fn non_empty(path: &Option<PathBuf>) -> Option<PathBuf> {
    path.clone().filter(|p| !p.as_os_str().is_empty())
}

fn ask_optional_path<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> AppResult<Option<PathBuf>> {
    Ok(ask_from(input, output, question)?
        .filter(|a| !a.is_empty())
        .map(|a| expand_tilde(&a)))
}

/// Merge command-line values with the configuration, asking on `input`
/// for anything still missing.
pub fn resolve<R: BufRead, W: Write>(
    cmd: &Commands,
    cfg: &Config,
    input: &mut R,
    output: &mut W,
) -> AppResult<GenerateRequest> {
    let Commands::Generate {
        time_file,
        defect_file,
        object_file,
        out_file,
        new_file,
        reused_file,
        encoding,
        delimiter,
        header,
        name,
        assign_name,
        team,
        individual,
        force,
    } = cmd
    else {
        return Err(AppError::Other("not a generate command".into()));
    };

    // no time file at all: nothing was given on the command line, ask for everything
    let ask_inputs = time_file.is_none();

    let mut time_file = non_empty(time_file);
    let mut defect_file = non_empty(defect_file);
    let mut object_file = non_empty(object_file);
    let mut new_file = non_empty(new_file);
    let mut reused_file = non_empty(reused_file);
    let mut out_file = non_empty(out_file);

    //
    // 1. Paths
    //
    if ask_inputs || out_file.is_none() {
        let cwd = std::env::current_dir()?;
        writeln!(output, "Note: your working directory is {}", cwd.display())?;

        if ask_inputs {
            time_file = ask_optional_path(input, output, "Path to time entry CSV file: ")?;
            defect_file = ask_optional_path(input, output, "Path to defect CSV file: ")?;
            object_file = ask_optional_path(
                input,
                output,
                "Path to combined object CSV file (optional): ",
            )?;
            new_file =
                ask_optional_path(input, output, "Path to new object CSV file (optional): ")?;
            reused_file =
                ask_optional_path(input, output, "Path to reused object CSV file (optional): ")?;
        }

        while out_file.is_none() {
            match ask_from(input, output, "Path to output text file: ")? {
                Some(answer) if !answer.is_empty() => out_file = Some(expand_tilde(&answer)),
                Some(_) => continue,
                None => return Err(AppError::Other("no output file given".into())),
            }
        }
    }
    let out_file = out_file.ok_or_else(|| AppError::Other("no output file given".into()))?;

    //
    // 2. Team / individual mode
    //
    let team_mode = if *team {
        true
    } else if *individual {
        false
    } else if let Some(configured) = cfg.team_mode {
        configured
    } else {
        ask_from(input, output, "Use team mode? ")?.is_some_and(|a| is_yes(&a))
    };
    info(if team_mode {
        "Using team mode."
    } else {
        "Not using team mode."
    });

    let mut name = name.clone().or_else(|| cfg.name.clone());
    if !team_mode && name.is_none() {
        name = ask_from(input, output, "Your name (for filtering): ")?.filter(|a| !a.is_empty());
    }

    Ok(GenerateRequest {
        time_file,
        defect_file,
        object_file,
        new_file,
        reused_file,
        out_file,
        encoding: encoding.clone().unwrap_or_else(|| cfg.encoding.clone()),
        dialect: delimiter.map(Dialect::from),
        header_file: header.clone(),
        team_mode,
        name,
        assign_name: assign_name.clone(),
        force: *force,
        header: cfg.header.clone(),
        line_ending: cfg.line_ending,
    })
}
