/// Icon, label and one-line summary shown for a module in `/help`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpDescriptor {
    pub icon: &'static str,
    pub label: &'static str,
    pub summary: &'static str,
}

impl HelpDescriptor {
    pub const fn new(icon: &'static str, label: &'static str, summary: &'static str) -> Self {
        Self {
            icon,
            label,
            summary,
        }
    }

    pub fn heading(&self) -> String {
        format!("{} {}", self.icon, self.label)
    }
}

/// One row of the help index: a module, its descriptor, and the commands it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    pub module: String,
    pub descriptor: HelpDescriptor,
    pub commands: Vec<CommandSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSummary {
    pub name: String,
    pub description: Option<String>,
}
