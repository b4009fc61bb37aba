pub mod forwarding;
pub mod module_models;

pub use forwarding::{Delegation, ForwardingTable};
pub use module_models::{CommandSummary, HelpDescriptor, HelpEntry};
