// Discord commands module.
// Each feature module gets its own command file.

pub mod error_tests;
pub mod groups;
pub mod help;
pub mod payments;
pub mod presence;
pub mod stubs;
pub mod suggestions;

use crate::discord::modules::FeatureModule;

/// Every module the bot loads, in load order.
pub fn feature_modules() -> Vec<&'static dyn FeatureModule> {
    let mut modules: Vec<&'static dyn FeatureModule> = vec![
        &payments::PaymentsModule,
        &suggestions::SuggestionsModule,
        &groups::FeedbackGroupModule,
        &error_tests::ErrorTestsModule,
    ];
    modules.extend(stubs::STUB_MODULES.iter().map(|m| m as &'static dyn FeatureModule));
    modules.push(&help::HelpModule);
    modules
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::{ErrorService, TruncationLimits};
    use crate::core::modules::Delegation;
    use crate::discord::modules::ModuleRegistry;
    use crate::infra::telemetry::in_memory::InMemoryTelemetrySink;
    use std::sync::Arc;

    fn registry_with_all_modules() -> ModuleRegistry {
        let mut registry = ModuleRegistry::new();
        for module in feature_modules() {
            registry.register(module).unwrap();
        }
        registry
    }

    #[test]
    fn test_all_modules_register() {
        let registry = registry_with_all_modules();

        assert!(registry.forwarding().contains("suggestions"));

        let index = registry.help_index();
        assert_eq!(index.len(), feature_modules().len());
        assert!(index.iter().any(|e| e.module == "leveling" && e.commands.is_empty()));

        let names: Vec<String> = registry
            .into_commands()
            .iter()
            .map(|c| c.name.to_string())
            .collect();
        for expected in ["premium", "qr", "suggest", "feedback", "testerror", "help"] {
            assert!(names.iter().any(|n| n == expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_feedback_suggest_targets_suggestions_module() {
        let registry = registry_with_all_modules();
        let forwarding = registry.forwarding();

        match forwarding.route(groups::SUGGESTIONS_MODULE, groups::SUGGEST_FALLBACK) {
            Delegation::Target(_) => {}
            Delegation::Fallback(_) => panic!("suggestions should be forwardable"),
        }
    }

    #[test]
    fn test_disabled_suggestions_falls_back_without_telemetry() {
        let sink = Arc::new(InMemoryTelemetrySink::new());
        let _errors = ErrorService::new(sink.clone(), TruncationLimits::default());

        let mut registry = registry_with_all_modules();
        assert!(registry.teardown("suggestions"));

        // The placeholder group itself stays loaded
        assert!(registry.is_loaded("feedback"));

        let forwarding = registry.forwarding();
        match forwarding.route(groups::SUGGESTIONS_MODULE, groups::SUGGEST_FALLBACK) {
            Delegation::Fallback(message) => assert_eq!(message, groups::SUGGEST_FALLBACK),
            Delegation::Target(_) => panic!("torn-down module must not be routed to"),
        }
        assert!(sink.delivered().is_empty());
        assert_eq!(sink.attempts(), 0);
    }

    #[test]
    fn test_forwarded_suggest_shares_cooldown() {
        let commands = registry_with_all_modules().into_commands();

        let direct = commands.iter().find(|c| c.name == "suggest").unwrap();
        let feedback = commands.iter().find(|c| c.name == "feedback").unwrap();
        let forwarded = feedback
            .subcommands
            .iter()
            .find(|c| c.name == "suggest")
            .unwrap();

        let direct_cooldown = direct.cooldown_config.read().unwrap().user;
        let forwarded_cooldown = forwarded.cooldown_config.read().unwrap().user;
        assert_eq!(direct_cooldown, Some(std::time::Duration::from_secs(60)));
        assert_eq!(forwarded_cooldown, direct_cooldown);
    }
}
