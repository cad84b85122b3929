use anyhow::Result;
use hostenv_core::Catalog;

pub fn targets_command(catalog: &Catalog, env: &str) -> Result<()> {
    for name in catalog.list_targets(env)? {
        println!("{name}");
    }
    Ok(())
}
