//! Resolver behavior across custom descriptions and record output

use spacemouse_launch::actions::{DeclareArgumentAction, NodeAction};
use spacemouse_launch::condition::Condition;
use spacemouse_launch::description::LaunchDescription;
use spacemouse_launch::record::LaunchRecord;
use spacemouse_launch::substitution::parse_substitutions;
use spacemouse_launch::{resolve_description, resolve_spacemouse_launch};
use std::collections::HashMap;

#[test]
fn test_record_json_round_trips() {
    let record = resolve_spacemouse_launch(HashMap::new()).unwrap();
    let json = record.to_json().unwrap();

    let parsed: LaunchRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.node.len(), 1);
    assert_eq!(parsed.node[0].executable, "pyspacemouse_publisher");
}

#[test]
fn test_record_written_to_file() {
    let record = resolve_spacemouse_launch(HashMap::new()).unwrap();
    let json = record.to_json().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("record.json");
    std::fs::write(&path, &json).unwrap();

    let read_back = std::fs::read_to_string(&path).unwrap();
    assert_eq!(read_back, json);
}

#[test]
fn test_declaration_must_precede_consumer() {
    // A node referencing an argument declared after it fails to resolve
    let mut description = LaunchDescription::new();
    description.add_node(
        NodeAction::new("pkg", "exec")
            .unwrap()
            .parameter("late", "$(var late)")
            .unwrap(),
    );
    description.add_argument(
        DeclareArgumentAction::new("late")
            .default_value("value")
            .unwrap(),
    );

    assert!(resolve_description(&description, HashMap::new()).is_err());
}

#[test]
fn test_override_wins_over_default() {
    let mut description = LaunchDescription::new();
    description.add_argument(
        DeclareArgumentAction::new("rate")
            .default_value("100")
            .unwrap(),
    );
    description.add_node(
        NodeAction::new("pkg", "exec")
            .unwrap()
            .parameter("rate", "$(var rate)")
            .unwrap(),
    );

    let overrides = HashMap::from([("rate".to_string(), "250".to_string())]);
    let record = resolve_description(&description, overrides).unwrap();
    assert_eq!(record.node[0].params, vec![("rate".to_string(), "250".to_string())]);
}

#[test]
fn test_default_referencing_earlier_argument() {
    let mut description = LaunchDescription::new();
    description.add_argument(
        DeclareArgumentAction::new("base")
            .default_value("/dev/input")
            .unwrap(),
    );
    description.add_argument(
        DeclareArgumentAction::new("device_path")
            .default_value("$(var base)/spacemouse0")
            .unwrap(),
    );
    description.add_node(
        NodeAction::new("pkg", "exec")
            .unwrap()
            .parameter("device_path", "$(var device_path)")
            .unwrap(),
    );

    let record = resolve_description(&description, HashMap::new()).unwrap();
    assert_eq!(record.node[0].params[0].1, "/dev/input/spacemouse0");
}

#[test]
fn test_unless_condition_gates_node() {
    let mut description = LaunchDescription::new();
    description.add_argument(
        DeclareArgumentAction::new("simulated")
            .default_value("true")
            .unwrap(),
    );
    description.add_node_when(
        NodeAction::new("pkg", "hardware_node").unwrap(),
        Condition::Unless(parse_substitutions("$(var simulated)").unwrap()),
    );

    let record = resolve_description(&description, HashMap::new()).unwrap();
    assert!(record.node.is_empty());

    let overrides = HashMap::from([("simulated".to_string(), "false".to_string())]);
    let record = resolve_description(&description, overrides).unwrap();
    assert_eq!(record.node.len(), 1);
}

#[test]
fn test_conditioned_declaration_applies_only_when_enabled() {
    let mut description = LaunchDescription::new();
    description.add_argument(
        DeclareArgumentAction::new("use_fallback")
            .default_value("false")
            .unwrap(),
    );
    description.add_argument_when(
        DeclareArgumentAction::new("device_path")
            .default_value("/dev/hidraw0")
            .unwrap(),
        Condition::If(parse_substitutions("$(var use_fallback)").unwrap()),
    );
    description.add_node(
        NodeAction::new("pkg", "exec")
            .unwrap()
            .parameter("device_path", "$(var device_path)")
            .unwrap(),
    );

    // Gated declaration skipped, nothing provides device_path
    assert!(resolve_description(&description, HashMap::new()).is_err());

    let overrides = HashMap::from([("use_fallback".to_string(), "true".to_string())]);
    let record = resolve_description(&description, overrides).unwrap();
    assert_eq!(record.node[0].params[0].1, "/dev/hidraw0");
}

#[test]
fn test_nested_substitution_selects_configuration() {
    std::env::set_var("SPACEMOUSE_PROFILE", "rear");

    let mut description = LaunchDescription::new();
    description.add_argument(
        DeclareArgumentAction::new("device_rear")
            .default_value("/dev/hidraw5")
            .unwrap(),
    );
    description.add_node(
        NodeAction::new("pkg", "exec")
            .unwrap()
            .parameter("device_path", "$(var device_$(env SPACEMOUSE_PROFILE))")
            .unwrap(),
    );

    let record = resolve_description(&description, HashMap::new()).unwrap();
    assert_eq!(record.node[0].params[0].1, "/dev/hidraw5");
}

#[test]
fn test_multiple_nodes_keep_order() {
    let mut description = LaunchDescription::new();
    description.add_node(NodeAction::new("pkg", "first").unwrap());
    description.add_node(NodeAction::new("pkg", "second").unwrap());

    let record = resolve_description(&description, HashMap::new()).unwrap();
    assert_eq!(record.node[0].executable, "first");
    assert_eq!(record.node[1].executable, "second");
}

#[test]
fn test_unknown_override_is_inert_for_builtin_descriptor() {
    // Overrides for undeclared names sit in the context but change nothing
    let overrides = HashMap::from([("unrelated".to_string(), "x".to_string())]);
    let record = resolve_spacemouse_launch(overrides).unwrap();

    let node = &record.node[0];
    assert_eq!(node.params.len(), 2);
    assert_eq!(node.params[0].1, "True");
}
