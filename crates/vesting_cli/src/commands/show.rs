//! Show command implementation
//!
//! Prints the regenerated schedule for a single grant.

use tracing::info;

use crate::config::CliConfig;
use crate::io::{self, OutputFormat};
use crate::{CliError, Result};
use vesting_models::ledger::GrantLedger;
use vesting_models::pricing::PriceSeries;

/// Run the show command
pub fn run(
    grants_path: &str,
    id: u64,
    prices_path: Option<&str>,
    config: &CliConfig,
) -> Result<()> {
    let grants = io::load_grants(grants_path)?;
    let prices: Option<PriceSeries> = prices_path.map(io::load_prices).transpose()?;

    let mut ledger = GrantLedger::new();
    for grant in grants {
        ledger.insert_grant(grant);
    }
    let grant = ledger.grant(id).ok_or(CliError::UnknownGrant(id))?;
    info!(
        "Grant {}: {} / {} - {} shares granted {}",
        id,
        grant.grant_type(),
        grant.share_class(),
        grant.share_quantity(),
        grant.grant_date()
    );

    ledger.regenerate(id, &config.resolver, Some(&config.calendar), prices.as_ref())?;

    let stdout = std::io::stdout();
    io::write_events(ledger.events(id), OutputFormat::Table, &mut stdout.lock())?;
    Ok(())
}
