use dropcore::history::RecentUploads;

use crate::config::PersistedConfig;

pub fn execute(clear: bool) -> anyhow::Result<()> {
    let mut config = PersistedConfig::load();

    if clear {
        config.set_recent_uploads(&RecentUploads::new(config.max_recent));
        config.save()?;
        println!("✓ Recent uploads cleared");
        return Ok(());
    }

    let history = config.recent_uploads();
    if history.is_empty() {
        println!("No recent uploads");
        return Ok(());
    }

    for entry in history.entries() {
        println!(
            "{}  {:>10} B  {}",
            entry.uploaded_at.format("%Y-%m-%d %H:%M"),
            entry.size,
            entry.path.as_deref().unwrap_or(&entry.name)
        );
    }
    Ok(())
}
