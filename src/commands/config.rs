//! Config subcommands handler

use anyhow::Result;

use pastedbg::theme::Theme;
use pastedbg::Config;

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(theme: &Theme) -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{}", toml_str.trim_end());
    println!();
    println!(
        "{}",
        theme.secondary_text(&format!("# {}", Config::config_path()?.display()))
    );
    Ok(())
}

/// Print the configuration file path.
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write the default configuration unless a file already exists.
pub fn handle_init(theme: &Theme) -> Result<()> {
    let path = Config::config_path()?;
    if path.exists() {
        println!(
            "{}",
            theme.secondary_text(&format!("Config already exists at {}", path.display()))
        );
        return Ok(());
    }
    let path = Config::default().save()?;
    println!(
        "{}",
        theme.success_text(&format!("Created {}", path.display()))
    );
    Ok(())
}
