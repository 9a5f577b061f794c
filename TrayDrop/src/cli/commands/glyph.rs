use dropcore::shortcut::{Platform, Shortcut};

use crate::config::PersistedConfig;

pub fn execute(combo: &str, platform: Option<Platform>) -> anyhow::Result<()> {
    let platform = platform.unwrap_or_else(|| PersistedConfig::load().effective_platform());
    let shortcut = Shortcut::parse(combo)?;
    println!("{}", shortcut.glyph(platform));
    Ok(())
}
