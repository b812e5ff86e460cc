// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use artisync_core::Settings;

use crate::cli::ConfigCommand;
use crate::error::Result;

/// Execute a config subcommand.
///
/// Settings are read directly so a broken remote configuration can still
/// be inspected and fixed.
pub fn run(data_dir: &Path, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let settings = Settings::load(data_dir)?;
            print!("{}", render(&settings)?);
            Ok(())
        }
        ConfigCommand::Set { key, value } => run_set(data_dir, &key, &value),
    }
}

/// Apply one `key = value` change and save it.
pub(crate) fn run_set(data_dir: &Path, key: &str, value: &str) -> Result<()> {
    let mut settings = Settings::load(data_dir)?;
    settings.set(key, value)?;
    settings.save(data_dir)?;

    let shown = if key.ends_with("token") {
        mask_token(value)
    } else {
        value.to_string()
    };
    println!("Set {} = {}", key, shown);
    Ok(())
}

/// Renders settings as TOML with access tokens masked.
pub(crate) fn render(settings: &Settings) -> Result<String> {
    let mut masked = settings.clone();
    if let Some(gist) = masked.credentials.gist.as_mut() {
        gist.token = mask_token(&gist.token);
    }
    if let Some(gitlab) = masked.credentials.gitlab.as_mut() {
        gitlab.token = mask_token(&gitlab.token);
    }
    toml::to_string_pretty(&masked)
        .map_err(|e| artisync_core::Error::Config(format!("failed to render config: {}", e)).into())
}

/// Keeps the last four characters of long tokens.
pub(crate) fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.is_empty() {
        String::new()
    } else if chars.len() <= 8 {
        "****".to_string()
    } else {
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("****{}", tail)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
