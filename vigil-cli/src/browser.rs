//! Console launch

use anyhow::{Context, Result};
use tracing::info;

/// Opens the build console in the default browser
pub fn open_console(url: &str) -> Result<()> {
    info!("Opening {}", url);

    open::that(url).with_context(|| format!("Failed to open {} in the default browser", url))
}
