//! Check command implementation
//!
//! Validates every grant by resolving its configuration and generating
//! its schedule without persisting anything. Exits non-zero when any
//! grant fails.

use tracing::{info, warn};

use crate::config::CliConfig;
use crate::io;
use crate::{CliError, Result};
use vesting_models::schedules::generate;

/// Run the check command
pub fn run(grants_path: &str, config: &CliConfig) -> Result<()> {
    let grants = io::load_grants(grants_path)?;
    let total = grants.len();
    let mut failed = 0usize;

    for grant in &grants {
        let outcome = config
            .resolver
            .resolve(grant)
            .map_err(Into::into)
            .and_then(|c| generate(grant, &c, Some(&config.calendar)));
        match outcome {
            Ok(schedule) => info!(
                "Grant {}: ok ({} events, {} shares)",
                grant.id(),
                schedule.len(),
                grant.share_quantity()
            ),
            Err(err) => {
                warn!("Grant {}: {}", grant.id(), err);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(CliError::ValidationFailed { failed, total });
    }
    info!("All {} grants validated", total);
    Ok(())
}
