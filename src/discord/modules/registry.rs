// Feature module registry.
//
// A feature module is a bundle of commands plus (optionally) a help-index
// descriptor and a forwarding target. The registry owns every loaded module,
// installs the shared error wrapper on each command, and finally hands the
// commands to poise.

use super::forwarding::ForwardableCommand;
use crate::core::modules::{CommandSummary, ForwardingTable, HelpDescriptor, HelpEntry};
use crate::discord::{Data, Error};
use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use thiserror::Error as ThisError;

pub type Command = poise::Command<Data, Error>;

pub trait FeatureModule: Send + Sync {
    /// Unique module name, also the key used for forwarding lookups.
    fn name(&self) -> &'static str;

    fn commands(&self) -> Vec<Command>;

    /// Help-index entry. Must be constant and never panic.
    fn describe(&self) -> Option<HelpDescriptor> {
        None
    }

    /// Modules that must already be registered before this one.
    fn companions(&self) -> &'static [&'static str] {
        &[]
    }

    fn forward_target(&self) -> Option<Arc<dyn ForwardableCommand>> {
        None
    }
}

#[derive(Debug, ThisError)]
pub enum RegistryError {
    #[error("Module `{module}` requires `{companion}` to be registered first")]
    MissingCompanion {
        module: &'static str,
        companion: &'static str,
    },

    #[error("Command `{command}` from `{module}` is already registered by `{owner}`")]
    DuplicateCommand {
        command: String,
        module: &'static str,
        owner: &'static str,
    },
}

struct LoadedModule {
    name: &'static str,
    descriptor: Option<HelpDescriptor>,
    commands: Vec<Command>,
}

pub struct ModuleRegistry {
    modules: Vec<LoadedModule>,
    forwarding: Arc<ForwardingTable<dyn ForwardableCommand>>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self {
            modules: Vec::new(),
            forwarding: Arc::new(ForwardingTable::new()),
        }
    }

    pub fn forwarding(&self) -> Arc<ForwardingTable<dyn ForwardableCommand>> {
        Arc::clone(&self.forwarding)
    }

    pub fn is_loaded(&self, name: &str) -> bool {
        self.modules.iter().any(|m| m.name == name)
    }

    /// Load a module. Registering the same name twice is a no-op.
    pub fn register(&mut self, module: &dyn FeatureModule) -> Result<(), RegistryError> {
        let name = module.name();
        if self.is_loaded(name) {
            tracing::debug!(module = name, "Module already registered, skipping");
            return Ok(());
        }

        for companion in module.companions() {
            if !self.is_loaded(companion) {
                return Err(RegistryError::MissingCompanion {
                    module: name,
                    companion,
                });
            }
        }

        let mut commands = module.commands();
        let mut seen = HashSet::new();
        for command in &commands {
            for invoked_as in invocation_names(command) {
                if let Some(owner) = self.owner_of(&invoked_as) {
                    return Err(RegistryError::DuplicateCommand {
                        command: invoked_as,
                        module: name,
                        owner,
                    });
                }
                if !seen.insert(invoked_as.clone()) {
                    return Err(RegistryError::DuplicateCommand {
                        command: invoked_as,
                        module: name,
                        owner: name,
                    });
                }
            }
        }

        for command in &mut commands {
            install_error_wrapper(command);
        }

        if let Some(target) = module.forward_target() {
            self.forwarding.insert(name, target);
        }

        tracing::info!(module = name, commands = commands.len(), "Module registered");
        self.modules.push(LoadedModule {
            name,
            descriptor: module.describe(),
            commands,
        });

        Ok(())
    }

    /// Unload a module. Unknown names are ignored and return `false`.
    pub fn teardown(&mut self, name: &str) -> bool {
        self.forwarding.remove(name);

        let before = self.modules.len();
        self.modules.retain(|m| m.name != name);
        let removed = self.modules.len() != before;
        if removed {
            tracing::info!(module = name, "Module torn down");
        }
        removed
    }

    /// Descriptor-bearing modules in load order, with their visible commands.
    pub fn help_index(&self) -> Vec<HelpEntry> {
        self.modules
            .iter()
            .filter_map(|module| {
                let descriptor = module.descriptor?;
                let commands = module
                    .commands
                    .iter()
                    .filter(|c| !c.hide_in_help)
                    .map(|c| CommandSummary {
                        name: c.name.to_string(),
                        description: c.description.as_ref().map(|d| d.to_string()),
                    })
                    .collect();

                Some(HelpEntry {
                    module: module.name.to_string(),
                    descriptor,
                    commands,
                })
            })
            .collect()
    }

    /// Hand every registered command over to the framework.
    pub fn into_commands(self) -> Vec<Command> {
        self.modules
            .into_iter()
            .flat_map(|module| module.commands)
            .collect()
    }

    /// Module already answering to `invoked_as`, by name or alias.
    fn owner_of(&self, invoked_as: &str) -> Option<&'static str> {
        self.modules
            .iter()
            .find(|m| {
                m.commands
                    .iter()
                    .any(|c| invocation_names(c).any(|n| n == invoked_as))
            })
            .map(|m| m.name)
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Every top-level name a command can be invoked by: its name plus aliases.
fn invocation_names(command: &Command) -> impl Iterator<Item = String> + '_ {
    std::iter::once(command.name.to_string())
        .chain(command.aliases.iter().map(|alias| alias.to_string()))
}

fn wrapped_on_error(
    error: poise::FrameworkError<'_, Data, Error>,
) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
    Box::pin(crate::discord::errors::on_error(error))
}

/// Every command (and subcommand) routes its failures through the same handler.
fn install_error_wrapper(command: &mut Command) {
    command.on_error = Some(wrapped_on_error);
    for subcommand in &mut command.subcommands {
        install_error_wrapper(subcommand);
    }
}
