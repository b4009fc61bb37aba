// Help-index entries for features whose commands live in other services.
// These modules register no commands; they only describe themselves.

use crate::core::modules::HelpDescriptor;
use crate::discord::modules::registry::{Command, FeatureModule};

pub struct DescriptorModule {
    name: &'static str,
    descriptor: HelpDescriptor,
}

impl FeatureModule for DescriptorModule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn commands(&self) -> Vec<Command> {
        Vec::new()
    }

    fn describe(&self) -> Option<HelpDescriptor> {
        Some(self.descriptor)
    }
}

pub const STUB_MODULES: &[DescriptorModule] = &[
    DescriptorModule {
        name: "leveling",
        descriptor: HelpDescriptor::new(
            "📈",
            "Leveling",
            "Earn XP by chatting and climb the server leaderboard.",
        ),
    },
    DescriptorModule {
        name: "polls",
        descriptor: HelpDescriptor::new("🗳️", "Polls", "Create polls and let the community vote."),
    },
    DescriptorModule {
        name: "invites",
        descriptor: HelpDescriptor::new(
            "📨",
            "Invite Tracking",
            "See who invited whom and how many members they brought in.",
        ),
    },
    DescriptorModule {
        name: "roles",
        descriptor: HelpDescriptor::new(
            "🛡️",
            "Roles & Permissions",
            "Self-assignable roles and permission management.",
        ),
    },
    DescriptorModule {
        name: "moderation",
        descriptor: HelpDescriptor::new(
            "🔨",
            "Moderation",
            "Warnings, timeouts, and other moderator tools.",
        ),
    },
    DescriptorModule {
        name: "tickets",
        descriptor: HelpDescriptor::new("🎫", "Tickets", "Open a private support ticket with staff."),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_stub_modules_are_unique_and_commandless() {
        let names: HashSet<_> = STUB_MODULES.iter().map(|m| m.name()).collect();
        assert_eq!(names.len(), STUB_MODULES.len());

        for module in STUB_MODULES {
            assert!(module.commands().is_empty());
            let descriptor = module.describe().unwrap();
            assert!(!descriptor.icon.is_empty());
            assert!(!descriptor.summary.is_empty());
        }
    }
}
