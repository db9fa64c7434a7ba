//! spacemouse_launch library
//!
//! Models the launch descriptor for the SpaceMouse teleoperation publisher:
//! an ordered list of argument declarations and node actions, a resolution
//! context applying caller overrides over declared defaults, and a record
//! generator producing the process invocation the supervisor consumes.

pub mod actions;
pub mod condition;
pub mod description;
pub mod error;
pub mod record;
pub mod spacemouse;
pub mod substitution;

use condition::should_run;
use description::{LaunchAction, LaunchDescription};
use error::Result;
use record::{CommandGenerator, LaunchRecord};
use std::collections::HashMap;
use substitution::LaunchContext;

/// Walks a launch description once, in order, producing the resolved record.
///
/// Holds no state across invocations; construct one resolver per launch.
pub struct LaunchResolver {
    context: LaunchContext,
    records: Vec<record::NodeRecord>,
}

impl LaunchResolver {
    pub fn new(overrides: HashMap<String, String>) -> Self {
        let mut context = LaunchContext::new();
        // Overrides are seeded first so declarations never clobber them
        for (k, v) in overrides {
            context.set_configuration(k, v);
        }

        Self {
            context,
            records: Vec::new(),
        }
    }

    pub fn resolve(&mut self, description: &LaunchDescription) -> Result<()> {
        for entry in description.actions() {
            match entry {
                LaunchAction::DeclareArgument { action, condition } => {
                    if !should_run(condition.as_ref(), &self.context)? {
                        log::debug!("Skipping argument '{}' due to condition", action.name);
                        continue;
                    }
                    action.apply(&mut self.context)?;
                }
                LaunchAction::Node { action, condition } => {
                    if !should_run(condition.as_ref(), &self.context)? {
                        log::debug!("Skipping node due to condition");
                        continue;
                    }
                    let record = CommandGenerator::generate_node_record(action, &self.context)?;
                    log::info!(
                        "Resolved node '{}' from package '{}'",
                        record.name.as_deref().unwrap_or(&record.executable),
                        record.package.as_deref().unwrap_or("-"),
                    );
                    self.records.push(record);
                }
            }
        }
        Ok(())
    }

    pub fn context(&self) -> &LaunchContext {
        &self.context
    }

    pub fn into_record(self) -> LaunchRecord {
        LaunchRecord { node: self.records }
    }
}

/// Resolve a launch description with the given overrides
pub fn resolve_description(
    description: &LaunchDescription,
    overrides: HashMap<String, String>,
) -> Result<LaunchRecord> {
    let mut resolver = LaunchResolver::new(overrides);
    resolver.resolve(description)?;
    Ok(resolver.into_record())
}

/// Resolve the built-in SpaceMouse publisher description
pub fn resolve_spacemouse_launch(overrides: HashMap<String, String>) -> Result<LaunchRecord> {
    let description = spacemouse::generate_launch_description()?;
    resolve_description(&description, overrides)
}
