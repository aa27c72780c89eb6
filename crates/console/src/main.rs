//! Headless entry point: builds the seeded console and prints what the
//! screens would show, as JSON.

use anyhow::Context;

use goldline_console::{Console, ConsoleConfig};

fn main() -> anyhow::Result<()> {
    let config = ConsoleConfig::from_env().context("reading GOLDLINE_* configuration")?;
    goldline_observability::init(config.log_format);
    tracing::debug!(?config, "configuration loaded");

    let console = Console::from_config(&config).context("seeding console")?;

    let snapshot = serde_json::json!({
        "dashboard": console.dashboard(),
        "catalog": console.list_items(),
        "session": console.current_session(),
        "profile": console.profile_view(),
    });
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
