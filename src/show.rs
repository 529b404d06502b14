use anyhow::{Context, Result};

use crate::artifact;
use crate::config::Config;
use crate::display;

pub fn run_show(config: &Config) -> Result<()> {
    let path = &config.cache.artifact_path;
    let values = artifact::read_artifact(path).with_context(|| {
        format!(
            "No size type artifact at {} — run `offersync refresh` first",
            path.display()
        )
    })?;

    println!("{} size types", values.len());
    display::print_columns(&values, config.display.columns);
    Ok(())
}
