//! Artifact health overview.
//!
//! A quick read-only summary of the persisted artifact: where it lives, how
//! many entries it holds, and whether the freshness gate would let the next
//! refresh skip. Used by `offersync status` to check on the cache without
//! touching the network.

use anyhow::Result;

use crate::artifact;
use crate::config::Config;
use crate::freshness;

pub fn run_status(config: &Config) -> Result<()> {
    let path = &config.cache.artifact_path;

    println!("offer-sync — artifact status");
    println!("============================");
    println!();
    println!("  Artifact:   {}", path.display());
    println!("  Scratch:    {}", config.cache.scratch_dir.display());

    match freshness::artifact_age_days(path) {
        Some(age) => {
            let entries = artifact::read_artifact(path).map(|v| v.len()).unwrap_or(0);
            let state = if age < config.cache.max_age_days {
                "fresh"
            } else {
                "stale"
            };
            println!("  Entries:    {}", entries);
            println!(
                "  Age:        {} day{} (refresh window {} days)",
                age,
                if age == 1 { "" } else { "s" },
                config.cache.max_age_days
            );
            println!("  State:      {}", state);
        }
        None => {
            println!("  State:      missing (run `offersync refresh`)");
        }
    }

    println!();
    Ok(())
}
