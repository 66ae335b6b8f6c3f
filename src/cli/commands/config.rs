use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::env;
use std::path::Path;
use std::process::Command;

/// Editor taken from `$EDITOR`, then `$VISUAL`, then the platform default.
fn default_editor() -> String {
    env::var("EDITOR")
        .or_else(|_| env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

/// Editors to try, in order: the one passed with `--editor` first.
fn editor_candidates(requested: Option<&str>) -> Vec<String> {
    let mut out: Vec<String> = requested.map(str::to_string).into_iter().collect();
    let fallback = default_editor();
    if !out.contains(&fallback) {
        out.push(fallback);
    }
    out
}

fn try_edit(editor: &str, path: &Path) -> bool {
    Command::new(editor)
        .arg(path)
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    else {
        return Ok(());
    };

    let path = Config::config_file();

    if !*print_config && !*edit_config {
        info(format!("Configuration file: {}", path.display()));
        return Ok(());
    }

    if *print_config {
        let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
        println!("{}", yaml);
    }

    if *edit_config {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "{} does not exist, run `skillvault init` first",
                path.display()
            )));
        }

        for candidate in editor_candidates(editor.as_deref()) {
            if try_edit(&candidate, &path) {
                success(format!("Configuration edited with '{}'", candidate));
                return Ok(());
            }
            warning(format!("Editor '{}' failed or is not installed", candidate));
        }

        return Err(AppError::Config(format!(
            "no usable editor found for {}",
            path.display()
        )));
    }

    Ok(())
}
