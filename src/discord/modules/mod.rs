pub mod forwarding;
pub mod registry;

pub use forwarding::{forward_or_fallback, ForwardableCommand};
pub use registry::{FeatureModule, ModuleRegistry};
