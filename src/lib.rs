//! # bevy_nav_agent_3d
//!
//! A Bevy plugin for physics-driven waypoint navigation agents.
//!
//! ## Features
//!
//! - Agents steer a dynamic rigid body along an ordered waypoint queue
//! - Velocity-based movement through avian3d (no manual integration)
//! - Separate visual mesh kept in lockstep with the physics body
//! - Smoothed yaw-only facing that trails the current waypoint
//! - Milestone messages when paths are assigned and waypoints are reached
//!
//! ## Quick Start
//!
//! ```ignore
//! use avian3d::prelude::*;
//! use bevy::prelude::*;
//! use bevy_nav_agent_3d::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(PhysicsPlugins::default())
//!         .add_plugins(NavPathPlugin)
//!         .add_plugins(NavAgentPlugin)
//!         .add_systems(Startup, setup)
//!         .run();
//! }
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
//!     // Paths are assigned (and re-assigned) through messages.
//!     commands.write_message(AssignPath {
//!         entity: agent.body,
//!         waypoints: vec![Vec3::new(8.0, 1.0, 0.0), Vec3::new(8.0, 1.0, 8.0)],
//!     });
//! }
//! ```
//!
//! ## Plugins
//!
//! - [`NavPathPlugin`]: waypoint queue type registration (required)
//! - [`NavAgentPlugin`]: agent steering and body/visual synchronization (required)

pub mod agent;
pub mod geometry;
pub mod path;

pub use agent::NavAgentPlugin;
pub use path::NavPathPlugin;

/// Convenient re-exports of commonly used types.
pub mod prelude {
    pub use crate::agent::{
        spawn_nav_agent, AssignPath, NavAgent, NavAgentEntities, NavAgentEvent, NavAgentEventKind,
        NavAgentPlugin,
    };
    pub use crate::geometry::{approach, yaw_toward};
    pub use crate::path::{NavPath, NavPathPlugin};
}
