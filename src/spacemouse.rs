//! Launch description for the SpaceMouse publisher node

use crate::actions::{DeclareArgumentAction, NodeAction};
use crate::description::LaunchDescription;
use crate::error::Result;

/// Package providing the publisher executable
pub const PACKAGE: &str = "spacemouse_publisher";
/// Executable started by the descriptor
pub const EXECUTABLE: &str = "pyspacemouse_publisher";
/// Node name the process runs under
pub const NODE_NAME: &str = "spacemouse_publisher";

/// Argument: operator position relative to the controlled system
pub const OPERATOR_POSITION_FRONT: &str = "operator_position_front";
/// Argument: device path of the SpaceMouse, empty means auto-detect
pub const DEVICE_PATH: &str = "device_path";

/// Build the launch description for the SpaceMouse publisher.
///
/// Declares `operator_position_front` (default "True") and `device_path`
/// (default "", auto-detect), then starts the publisher node with both
/// arguments forwarded as parameters. Boolean-ness of the operator position
/// and existence of the device path are checked by the node process, not
/// here.
pub fn generate_launch_description() -> Result<LaunchDescription> {
    let mut description = LaunchDescription::new();

    description.add_argument(
        DeclareArgumentAction::new(OPERATOR_POSITION_FRONT)
            .default_value("True")?
            .description("Set to True if the operator is in the front position, otherwise False"),
    );

    description.add_argument(
        DeclareArgumentAction::new(DEVICE_PATH)
            .default_value("")?
            .description("Device path for the SpaceMouse"),
    );

    description.add_node(
        NodeAction::new(PACKAGE, EXECUTABLE)?
            .name(NODE_NAME)?
            .output("screen")
            .parameter(
                OPERATOR_POSITION_FRONT,
                "$(var operator_position_front)",
            )?
            .parameter(DEVICE_PATH, "$(var device_path)")?,
    );

    Ok(description)
}
