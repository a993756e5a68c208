use anyhow::{Context, Result};

use super::Settings;

/// Prints the resolved configuration in the specified format.
///
/// # Arguments
/// * `format` - The output format ("yaml", "json" or "toml").
///
/// # Errors
/// Returns an error if the configuration cannot be resolved or the format is
/// unsupported.
pub fn print_config(settings: &Settings, format: &str) -> Result<()> {
    let config = settings.client_config()?;
    let rendered = config
        .render(format)
        .with_context(|| format!("failed to render configuration as {format}"))?;
    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}
