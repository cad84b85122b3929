use anyhow::Result;
use hostenv_core::{Catalog, TargetMode, resolve_environment, specialize};
use tracing::debug;

use crate::cli::OutputFormat;
use crate::display::render_descriptors;
use crate::utils::parse_target_list;

pub fn show_command(
    catalog: &Catalog,
    env: &str,
    targets: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let names = targets.map(parse_target_list).unwrap_or_default();
    debug!("Showing {} with targets {:?}", env, names);

    // Every name given here is meant as a target
    let resolved = resolve_environment(catalog, env)?;
    let specialization = specialize(&resolved, names.as_slice(), TargetMode::Strict)?;

    let out = render_descriptors(&specialization.descriptors, format)?;
    println!("{}", out.trim_end());
    Ok(())
}
