//! Command-line and record generation

use crate::actions::NodeAction;
use crate::error::GenerationError;
use crate::record::types::NodeRecord;
use crate::substitution::{resolve_substitutions, LaunchContext};
use std::path::Path;

pub struct CommandGenerator;

impl CommandGenerator {
    /// Resolve a node action against the context into a record
    pub fn generate_node_record(
        node: &NodeAction,
        context: &LaunchContext,
    ) -> Result<NodeRecord, GenerationError> {
        let cmd = Self::generate_node_command(node, context)?;

        let package = resolve_substitutions(&node.package, context)?;
        let executable = resolve_substitutions(&node.executable, context)?;

        let name = match &node.name {
            Some(name_subs) => Some(resolve_substitutions(name_subs, context)?),
            None => Some(executable.clone()),
        };

        let namespace = match &node.namespace {
            Some(ns_subs) => Some(resolve_substitutions(ns_subs, context)?),
            None => Some("/".to_string()),
        };

        let params: Vec<(String, String)> = node
            .parameters
            .iter()
            .map(|p| {
                let value = resolve_substitutions(&p.value, context)?;
                Ok((p.name.clone(), value))
            })
            .collect::<Result<Vec<_>, GenerationError>>()?;

        let remaps: Vec<(String, String)> = node
            .remappings
            .iter()
            .map(|r| {
                let from = resolve_substitutions(&r.from, context)?;
                let to = resolve_substitutions(&r.to, context)?;
                Ok((from, to))
            })
            .collect::<Result<Vec<_>, GenerationError>>()?;

        Ok(NodeRecord {
            executable,
            package: Some(package),
            name,
            namespace,
            output: node.output.clone(),
            params,
            remaps,
            cmd,
        })
    }

    /// Build the spawn command line the supervisor would execute
    pub fn generate_node_command(
        node: &NodeAction,
        context: &LaunchContext,
    ) -> Result<Vec<String>, GenerationError> {
        let mut cmd = Vec::new();

        let package = resolve_substitutions(&node.package, context)?;
        let executable = resolve_substitutions(&node.executable, context)?;
        cmd.push(Self::resolve_executable_path(&package, &executable));

        cmd.push("--ros-args".to_string());

        let node_name = match &node.name {
            Some(name_subs) => resolve_substitutions(name_subs, context)?,
            None => executable.clone(),
        };
        cmd.push("-r".to_string());
        cmd.push(format!("__node:={}", node_name));

        let namespace = match &node.namespace {
            Some(ns_subs) => resolve_substitutions(ns_subs, context)?,
            None => "/".to_string(),
        };
        cmd.push("-r".to_string());
        cmd.push(format!("__ns:={}", namespace));

        for remap in &node.remappings {
            let from = resolve_substitutions(&remap.from, context)?;
            let to = resolve_substitutions(&remap.to, context)?;
            cmd.push("-r".to_string());
            cmd.push(format!("{}:={}", from, to));
        }

        for param in &node.parameters {
            let value = resolve_substitutions(&param.value, context)?;
            cmd.push("-p".to_string());
            cmd.push(format!("{}:={}", param.name, value));
        }

        Ok(cmd)
    }

    /// Resolve the installed executable path in the ament layout.
    ///
    /// Checks AMENT_PREFIX_PATH entries first and falls back to the
    /// ROS_DISTRO system prefix (humble when unset). The path is constructed
    /// even when nothing exists on disk; the supervisor reports missing
    /// executables at spawn time.
    fn resolve_executable_path(package: &str, executable: &str) -> String {
        if let Ok(prefix_path) = std::env::var("AMENT_PREFIX_PATH") {
            for prefix in prefix_path.split(':') {
                let candidate = format!("{}/lib/{}/{}", prefix, package, executable);
                if Path::new(&candidate).exists() {
                    return candidate;
                }
            }
        }

        let distro = std::env::var("ROS_DISTRO").unwrap_or_else(|_| "humble".to_string());
        format!("/opt/ros/{}/lib/{}/{}", distro, package, executable)
    }
}
