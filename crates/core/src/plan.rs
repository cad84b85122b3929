//! Invocation planning
//!
//! Expands a descriptor into the concrete invocations an executor would run:
//! one per remote host, or a single local one. Nothing is executed here.

use serde::Serialize;
use std::fmt;

use crate::config::{CommandTable, TargetSpec};
use crate::error::{Error, Result};
use crate::resolve::ResolvedEnv;

/// Where a command runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Local,
    Remote,
}

/// Which command table a label is looked up in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    #[default]
    Cmd,
    Log,
    Cat,
}

impl CommandKind {
    fn table(self, spec: &TargetSpec) -> &CommandTable {
        match self {
            CommandKind::Cmd => &spec.cmd,
            CommandKind::Log => &spec.log,
            CommandKind::Cat => &spec.cat,
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandKind::Cmd => write!(f, "cmd"),
            CommandKind::Log => write!(f, "log"),
            CommandKind::Cat => write!(f, "cat"),
        }
    }
}

/// A single command bound to where it runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    /// `user@host` or `host`; `None` for local invocations
    pub destination: Option<String>,
    /// Directory to run in, from the spec's `path`
    pub workdir: Option<String>,
    pub command: String,
    /// Tag for this invocation's output
    pub prefix: String,
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.prefix)?;
        if let Some(destination) = &self.destination {
            write!(f, "{destination}: ")?;
        }
        if let Some(workdir) = &self.workdir {
            write!(f, "cd {workdir} && ")?;
        }
        write!(f, "{}", self.command)
    }
}

/// Plan the invocations of `label` from the `kind` table of `channel`.
pub fn invocations(
    env: &ResolvedEnv,
    channel: Channel,
    kind: CommandKind,
    label: &str,
) -> Result<Vec<Invocation>> {
    let spec = match channel {
        Channel::Local => &env.local,
        Channel::Remote => &env.remote,
    };

    let command = kind
        .table(spec)
        .get(label)
        .filter(|command| !command.is_empty())
        .ok_or_else(|| Error::UnknownCommand {
            kind: kind.to_string(),
            label: label.to_string(),
            environment: env.label(),
        })?;

    let workdir = Some(spec.path.clone()).filter(|path| !path.is_empty());

    match channel {
        Channel::Local => Ok(vec![Invocation {
            destination: None,
            workdir,
            command: command.clone(),
            prefix: env.label(),
        }]),
        Channel::Remote => {
            if spec.hosts.is_empty() {
                return Err(Error::NoHosts {
                    environment: env.label(),
                });
            }

            Ok(spec
                .hosts
                .iter()
                .map(|host| {
                    let destination = if spec.user.is_empty() {
                        host.clone()
                    } else {
                        format!("{}@{}", spec.user, host)
                    };
                    let prefix = match &env.target {
                        Some(target) => format!("{destination}|{target}"),
                        None => destination.clone(),
                    };
                    Invocation {
                        destination: Some(destination),
                        workdir: workdir.clone(),
                        command: command.clone(),
                        prefix,
                    }
                })
                .collect())
        }
    }
}
