//! Structural merging of target specs
//!
//! Two policies are supported:
//! - `FillOnly`: a field is copied only while the destination field is empty
//! - `Override`: a non-empty source field always replaces the destination
//!
//! Command tables merge label by label. Host lists are a single value: a
//! non-empty list is never spliced with another one.

use super::{CommandTable, TargetSpec};

/// How a source spec is folded into a destination spec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// Only populate fields that are currently empty
    FillOnly,
    /// Replace fields whenever the source field is non-empty
    Override,
}

impl MergePolicy {
    fn force_replace(self) -> bool {
        matches!(self, MergePolicy::Override)
    }
}

impl TargetSpec {
    /// Merge `src` into `self` under the given policy.
    ///
    /// Values are cloned out of `src`, so later changes to either spec never
    /// leak into the other.
    pub fn merge(&mut self, src: &TargetSpec, policy: MergePolicy) {
        let force_replace = policy.force_replace();

        merge_list(&mut self.hosts, &src.hosts, force_replace);

        merge_scalar(&mut self.user, &src.user, force_replace);
        merge_scalar(&mut self.branch, &src.branch, force_replace);
        merge_scalar(&mut self.url, &src.url, force_replace);
        merge_scalar(&mut self.path, &src.path, force_replace);

        merge_table(&mut self.log, &src.log, force_replace);
        merge_table(&mut self.cmd, &src.cmd, force_replace);
        merge_table(&mut self.cat, &src.cat, force_replace);
    }

    /// Fill-only merge: `self` keeps every value it already has.
    pub fn fill_from(&mut self, src: &TargetSpec) {
        self.merge(src, MergePolicy::FillOnly);
    }

    /// Override merge: non-empty fields of `src` win.
    pub fn override_from(&mut self, src: &TargetSpec) {
        self.merge(src, MergePolicy::Override);
    }
}

fn merge_scalar(base: &mut String, incoming: &str, force_replace: bool) {
    if incoming.is_empty() {
        return;
    }
    if force_replace || base.is_empty() {
        *base = incoming.to_string();
    }
}

fn merge_list(base: &mut Vec<String>, incoming: &[String], force_replace: bool) {
    if incoming.is_empty() {
        return;
    }
    if force_replace || base.is_empty() {
        *base = incoming.to_vec();
    }
}

fn merge_table(base: &mut CommandTable, incoming: &CommandTable, force_replace: bool) {
    for (label, command) in incoming {
        if command.is_empty() {
            continue;
        }
        match base.get_mut(label) {
            Some(existing) if !force_replace && !existing.is_empty() => {}
            Some(existing) => *existing = command.clone(),
            None => {
                base.insert(label.clone(), command.clone());
            }
        }
    }
}
