//! Generate command implementation
//!
//! Regenerates every grant's schedule and emits the vest events.

use tracing::{info, warn};

use crate::config::CliConfig;
use crate::io::{self, OutputFormat};
use crate::Result;
use vesting_models::ledger::GrantLedger;
use vesting_models::pricing::PriceSeries;
use vesting_models::schedules::VestEvent;

/// Run the generate command
pub fn run(
    grants_path: &str,
    prices_path: Option<&str>,
    format: &str,
    output: Option<&str>,
    config: &CliConfig,
) -> Result<()> {
    let format: OutputFormat = format.parse()?;
    let grants = io::load_grants(grants_path)?;
    let prices: Option<PriceSeries> = prices_path.map(io::load_prices).transpose()?;
    info!("Loaded {} grants from {}", grants.len(), grants_path);

    let mut ledger = GrantLedger::new();
    for grant in grants {
        ledger.insert_grant(grant);
    }

    let report = ledger.regenerate_all(&config.resolver, Some(&config.calendar), prices.as_ref());
    info!(
        "Regenerated {} of {} grants",
        report.succeeded,
        report.total()
    );
    for (id, err) in &report.failures {
        warn!("Grant {} skipped: {}", id, err);
    }

    // Events come out grouped by grant in id order, dates ascending
    // within each grant.
    let events: Vec<VestEvent> = ledger
        .grants()
        .flat_map(|g| ledger.events(g.id()).iter().cloned())
        .collect();

    match output {
        Some(path) => {
            let mut file = std::fs::File::create(path)?;
            io::write_events(&events, format, &mut file)?;
            info!("Wrote {} events to {}", events.len(), path);
        }
        None => {
            let stdout = std::io::stdout();
            io::write_events(&events, format, &mut stdout.lock())?;
        }
    }

    Ok(())
}
