use anyhow::Result;
use hostenv_core::Catalog;

pub fn list_command(catalog: &Catalog) -> Result<()> {
    for name in catalog.list_environments() {
        println!("{name}");
    }
    Ok(())
}
