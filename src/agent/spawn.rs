use avian3d::prelude::*;
use bevy::prelude::*;

use super::NavAgent;

/// Capsule dimensions shared by the visual mesh and the collider.
const CAPSULE_RADIUS: f32 = 0.5;
const CAPSULE_LENGTH: f32 = 1.0;

/// The entity pair making up a spawned agent.
#[derive(Debug, Clone, Copy)]
pub struct NavAgentEntities {
    /// The physics body entity carrying [`NavAgent`].
    pub body: Entity,
    /// The visual mesh entity the body drives.
    pub visual: Entity,
}

/// Spawn a navigation agent at `position`.
///
/// Creates two entities: a capsule visual mesh, and a dynamic rigid body
/// with a matching capsule collider. The body has its rotation axes locked
/// (facing is driven from the visual each frame, never by physics torque)
/// and sleeping disabled so it keeps accepting velocity commands while
/// idle. The agent starts without a [`NavPath`](crate::path::NavPath) and
/// stands still until one is assigned.
pub fn spawn_nav_agent(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    position: Vec3,
) -> NavAgentEntities {
    let visual = commands
        .spawn((
            Mesh3d(meshes.add(Capsule3d::new(CAPSULE_RADIUS, CAPSULE_LENGTH))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.9, 0.2, 0.2),
                ..default()
            })),
            Transform::from_translation(position),
        ))
        .id();

    let body = commands
        .spawn((
            NavAgent {
                sighting: position,
                ..NavAgent::new(visual)
            },
            RigidBody::Dynamic,
            Collider::capsule(CAPSULE_RADIUS, CAPSULE_LENGTH),
            LockedAxes::ROTATION_LOCKED,
            SleepingDisabled,
            LinearVelocity::ZERO,
            ExternalForce::ZERO,
            Position(position),
            Transform::from_translation(position),
        ))
        .id();

    NavAgentEntities { body, visual }
}
