//! Config command handler
//!
//! Each subcommand first computes its outcome against the in-memory config; only
//! `run` touches the config file, stdin and stdout.

use crate::args::ConfigSubcommand;
use famgraph::config::Config;
use std::io::{self, Write};

/// Dispatch config subcommands, returning the process exit code
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) -> i32 {
    let outcome = match subcommand {
        None => show(config, None),
        Some(ConfigSubcommand::Get { key }) => show(config, key.as_deref()),
        Some(ConfigSubcommand::Set { key, value }) => {
            apply_set(config, &key, &value).and_then(|msg| save(config).map(|()| msg))
        }
        Some(ConfigSubcommand::Unset { key }) => {
            apply_unset(config, defaults, &key).and_then(|msg| save(config).map(|()| msg))
        }
        Some(ConfigSubcommand::Reset) => reset_with_prompt(),
    };

    match outcome {
        Ok(message) => {
            print!("{message}");
            0
        }
        Err(e) => {
            eprintln!("{e}");
            1
        }
    }
}

/// Text printed by `config get`: one value, or the whole configuration
fn show(config: &Config, key: Option<&str>) -> Result<String, String> {
    let Some(key) = key else {
        return Ok(format!(
            "\n=== famgraph configuration ===\n# {}\n\n{config}",
            Config::get_config_file_path().display()
        ));
    };

    config.get(key).map(|value| format!("{value}\n")).ok_or_else(|| {
        format!(
            "Unknown config key: '{key}'\n   Known keys: {}",
            Config::KEYS.join(", ")
        )
    })
}

fn apply_set(config: &mut Config, key: &str, value: &str) -> Result<String, String> {
    config.set(key, value)?;
    famgraph::info!("Config key '{key}' updated");
    Ok(format!("✓ Set {key} = {value}\n"))
}

fn apply_unset(config: &mut Config, defaults: &Config, key: &str) -> Result<String, String> {
    config.unset(key, defaults)?;
    Ok(match config.get(key) {
        Some(value) if !value.is_empty() => format!("✓ Reset {key} to default ({value})\n"),
        _ => format!("✓ Reset {key} to default\n"),
    })
}

fn save(config: &Config) -> Result<(), String> {
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))
}

/// `y` / `yes` in any case
fn confirms(response: &str) -> bool {
    let response = response.trim();
    response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes")
}

fn reset_with_prompt() -> Result<String, String> {
    let path = Config::get_config_file_path();
    if !path.exists() {
        return Ok("✓ Config is already at defaults\n".to_string());
    }

    print!("Reset {} to defaults? (y/n): ", path.display());
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    if !confirms(&response) {
        return Ok("✗ Reset cancelled\n".to_string());
    }
    Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
    Ok("✓ Config reset to defaults\n".to_string())
}
