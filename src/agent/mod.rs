//! Physics-driven navigation agents that follow waypoint paths.
//!
//! An agent is a dynamic rigid body steered by commanding its linear
//! velocity toward the front of a [`NavPath`](crate::path::NavPath) queue,
//! plus a separate visual mesh kept in lockstep with the body. Facing is
//! yaw-only and trails a smoothed sighting position so it never snaps when
//! the path advances.
//!
//! # Example
//!
//! ```rust,ignore
//! use bevy::prelude::*;
//! use bevy_nav_agent_3d::prelude::*;
//!
//! fn setup(
//!     mut commands: Commands,
//!     mut meshes: ResMut<Assets<Mesh>>,
//!     mut materials: ResMut<Assets<StandardMaterial>>,
//! ) {
//!     let agent = spawn_nav_agent(
//!         &mut commands,
//!         &mut meshes,
//!         &mut materials,
//!         Vec3::new(0.0, 1.0, 0.0),
//!     );
//!
//!     commands.write_message(AssignPath {
//!         entity: agent.body,
//!         waypoints: vec![Vec3::new(8.0, 1.0, 0.0), Vec3::new(8.0, 1.0, 8.0)],
//!     });
//! }
//! ```

mod components;
mod spawn;
mod systems;

pub use components::*;
pub use spawn::{spawn_nav_agent, NavAgentEntities};
pub use systems::{assign_paths, steer_agents, sync_agent_visuals};

use bevy::prelude::*;

/// Plugin that enables waypoint navigation for physics-driven agents.
///
/// The systems run chained in [`Update`]: path assignment, then body/visual
/// synchronization, then steering - the fixed order the motion rule
/// assumes.
pub struct NavAgentPlugin;

impl Plugin for NavAgentPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<NavAgent>()
            .add_message::<AssignPath>()
            .add_message::<NavAgentEvent>()
            .add_systems(
                Update,
                (
                    systems::assign_paths,
                    systems::sync_agent_visuals,
                    systems::steer_agents,
                )
                    .chain(),
            );
    }
}
