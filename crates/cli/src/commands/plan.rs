use anyhow::{Result, bail};
use hostenv_core::{
    Catalog, Channel, CommandKind, TargetMode, plan, resolve_environment, specialize,
};
use tracing::debug;

use crate::utils::parse_target_list;

/// Print every invocation of a command label.
///
/// `args` is `[TARGETS] LABEL`. In best-effort mode a lone argument is first
/// tried as a target list and only taken as the label when it names no targets.
pub fn plan_command(
    catalog: &Catalog,
    env: &str,
    args: &[String],
    local: bool,
    kind: CommandKind,
    mode: TargetMode,
) -> Result<()> {
    let resolved = resolve_environment(catalog, env)?;

    let (first, rest) = match args.split_first() {
        Some(split) => split,
        None => bail!("missing command label"),
    };

    let (descriptors, label) = match (mode, rest.first()) {
        (TargetMode::Strict, None) => (vec![resolved], first),
        (_, Some(label)) => {
            let names = parse_target_list(first);
            let specialization = specialize(&resolved, names.as_slice(), mode)?;
            if !specialization.consumed {
                bail!("unexpected argument \"{first}\": not a target of \"{env}\"");
            }
            (specialization.descriptors, label)
        }
        (TargetMode::BestEffort, None) => {
            let names = parse_target_list(first);
            let specialization = specialize(&resolved, names.as_slice(), mode)?;
            if specialization.consumed {
                bail!("missing command label after targets \"{first}\"");
            }
            (specialization.descriptors, first)
        }
    };

    let channel = if local { Channel::Local } else { Channel::Remote };
    debug!("Planning {} \"{}\" on {:?} channel", kind, label, channel);

    for descriptor in &descriptors {
        for invocation in plan::invocations(descriptor, channel, kind, label)? {
            println!("{invocation}");
        }
    }
    Ok(())
}
