//! Launch description: the ordered action list

use crate::actions::{DeclareArgumentAction, NodeAction};
use crate::condition::Condition;

/// One entry in a launch description, with an optional gating condition
#[derive(Debug, Clone)]
pub enum LaunchAction {
    DeclareArgument {
        action: DeclareArgumentAction,
        condition: Option<Condition>,
    },
    Node {
        action: NodeAction,
        condition: Option<Condition>,
    },
}

/// Ordered list of launch actions.
///
/// Actions are evaluated strictly in insertion order: a declaration must
/// precede any node that consumes its argument.
#[derive(Debug, Clone, Default)]
pub struct LaunchDescription {
    actions: Vec<LaunchAction>,
}

impl LaunchDescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_argument(&mut self, action: DeclareArgumentAction) -> &mut Self {
        self.actions.push(LaunchAction::DeclareArgument {
            action,
            condition: None,
        });
        self
    }

    pub fn add_argument_when(
        &mut self,
        action: DeclareArgumentAction,
        condition: Condition,
    ) -> &mut Self {
        self.actions.push(LaunchAction::DeclareArgument {
            action,
            condition: Some(condition),
        });
        self
    }

    pub fn add_node(&mut self, action: NodeAction) -> &mut Self {
        self.actions.push(LaunchAction::Node {
            action,
            condition: None,
        });
        self
    }

    pub fn add_node_when(&mut self, action: NodeAction, condition: Condition) -> &mut Self {
        self.actions.push(LaunchAction::Node {
            action,
            condition: Some(condition),
        });
        self
    }

    pub fn actions(&self) -> &[LaunchAction] {
        &self.actions
    }

    /// Declared arguments in declaration order
    pub fn arguments(&self) -> impl Iterator<Item = &DeclareArgumentAction> {
        self.actions.iter().filter_map(|a| match a {
            LaunchAction::DeclareArgument { action, .. } => Some(action),
            _ => None,
        })
    }
}
