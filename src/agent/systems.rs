use avian3d::prelude::*;
use bevy::prelude::*;

use crate::geometry::{approach, yaw_toward};
use crate::path::NavPath;

use super::{AssignPath, NavAgent, NavAgentEvent, NavAgentEventKind};

/// System that applies [`AssignPath`] messages.
///
/// Replaces the target agent's [`NavPath`] wholesale and strips all motion
/// inherited from the previous path: accumulated external forces are
/// cleared and both the body's linear velocity and the agent's commanded
/// velocity are zeroed.
pub fn assign_paths(
    mut messages: MessageReader<AssignPath>,
    mut commands: Commands,
    mut agents: Query<(&mut NavAgent, &mut LinearVelocity, &mut ExternalForce)>,
    mut events: MessageWriter<NavAgentEvent>,
) {
    for message in messages.read() {
        let Ok((mut agent, mut linvel, mut force)) = agents.get_mut(message.entity) else {
            warn!(
                "AssignPath target {:?} is not a navigation agent",
                message.entity
            );
            continue;
        };

        force.clear();
        linvel.0 = Vec3::ZERO;
        agent.velocity = Vec3::ZERO;

        commands
            .entity(message.entity)
            .insert(NavPath::new(message.waypoints.iter().copied()));

        events.write(NavAgentEvent {
            entity: message.entity,
            kind: NavAgentEventKind::PathAssigned,
        });
    }
}

/// System that keeps each physics body and its visual mesh in lockstep.
///
/// Two one-directional copies in a fixed order: the body's translation
/// drives the visual's position, then the visual's rotation drives the
/// rotation-locked body. The second copy is what feeds the yaw-only facing
/// set by [`steer_agents`] back into the body, keeping the collider
/// orientation consistent with the visible facing.
pub fn sync_agent_visuals(
    mut agents: Query<(&NavAgent, &Position, &mut Rotation)>,
    mut visuals: Query<&mut Transform>,
) {
    for (agent, position, mut rotation) in &mut agents {
        let Ok(mut transform) = visuals.get_mut(agent.visual) else {
            continue;
        };
        transform.translation = position.0;
        rotation.0 = transform.rotation;
    }
}

/// System that runs the per-step steering rule for every agent with a path.
///
/// While the front waypoint is outside the arrival radius, the body's
/// linear velocity is set to `direction * speed * delta` and the visual
/// mesh yaws toward the smoothed sighting position. Once inside the
/// radius, the front waypoint is popped (at most one per step) unless it
/// is the last one, in which case the agent holds position on it.
pub fn steer_agents(
    time: Res<Time>,
    mut agents: Query<(
        Entity,
        &mut NavAgent,
        &mut NavPath,
        &Position,
        &mut LinearVelocity,
        &mut ExternalForce,
    )>,
    mut visuals: Query<&mut Transform>,
    mut events: MessageWriter<NavAgentEvent>,
) {
    let delta = time.delta_secs();
    // Zero on the first frame; steering with it would wipe the commanded
    // velocity.
    if delta <= 0.0 || !delta.is_finite() {
        return;
    }

    for (entity, mut agent, mut path, position, mut linvel, mut force) in &mut agents {
        let Some(target) = path.front() else {
            continue;
        };
        let offset = target - position.0;

        // The sighting position trails the raw waypoint so the facing
        // turns smoothly instead of snapping when the path advances.
        agent.sighting = approach(agent.sighting, target, agent.sighting_rate, delta);

        // Forces from a previous step must not carry over.
        force.clear();

        // A too-short offset cannot be normalized and counts as arrived.
        let direction = (offset.length_squared() > agent.arrival_radius_sq)
            .then(|| offset.try_normalize())
            .flatten();

        if let Some(direction) = direction {
            agent.velocity = direction * agent.speed;
            linvel.0 = agent.velocity * delta;

            if let Ok(mut transform) = visuals.get_mut(agent.visual) {
                if let Some(facing) = yaw_toward(transform.translation, agent.sighting) {
                    transform.rotation = facing;
                }
            }
        } else if path.len() > 1 {
            path.pop_front();
            agent.path_travel_started = !agent.path_travel_started;
            debug!(
                "agent {entity:?} reached waypoint {target}, {} remaining",
                path.len()
            );
            events.write(NavAgentEvent {
                entity,
                kind: NavAgentEventKind::WaypointReached,
            });
        }
        // Within the radius of the final waypoint the agent holds: the
        // waypoint is never popped and the velocity is left as-is.
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    const DT: f32 = 0.016;

    fn test_app() -> App {
        let mut app = App::new();
        app.init_resource::<Time>()
            .add_message::<AssignPath>()
            .add_message::<NavAgentEvent>()
            .add_systems(
                Update,
                (assign_paths, sync_agent_visuals, steer_agents).chain(),
            );
        app
    }

    fn spawn_agent(app: &mut App, position: Vec3, waypoints: Vec<Vec3>) -> (Entity, Entity) {
        let visual = app
            .world_mut()
            .spawn(Transform::from_translation(position))
            .id();
        let body = app
            .world_mut()
            .spawn((
                NavAgent {
                    sighting: position,
                    ..NavAgent::new(visual)
                },
                NavPath::new(waypoints),
                Position(position),
                Rotation::default(),
                LinearVelocity::ZERO,
                ExternalForce::ZERO,
            ))
            .id();
        (body, visual)
    }

    fn step(app: &mut App, delta: f32) {
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(delta));
        app.update();
    }

    #[test]
    fn test_far_waypoint_commands_delta_scaled_velocity() {
        let mut app = test_app();
        let (body, _) = spawn_agent(&mut app, Vec3::ZERO, vec![Vec3::new(10.0, 0.0, 0.0)]);

        step(&mut app, DT);

        let linvel = app.world().get::<LinearVelocity>(body).unwrap().0;
        assert!((linvel - Vec3::new(500.0 * DT, 0.0, 0.0)).length() < 1e-4);
        // The waypoint is not consumed while the agent is still far away.
        assert_eq!(app.world().get::<NavPath>(body).unwrap().len(), 1);
        let agent = app.world().get::<NavAgent>(body).unwrap();
        assert!((agent.velocity - Vec3::new(500.0, 0.0, 0.0)).length() < 1e-3);
    }

    #[test]
    fn test_assigning_path_resets_velocity() {
        let mut app = test_app();
        let (body, _) = spawn_agent(&mut app, Vec3::ZERO, vec![Vec3::new(10.0, 0.0, 0.0)]);
        step(&mut app, DT);
        assert!(app.world().get::<LinearVelocity>(body).unwrap().0.length() > 0.0);

        app.world_mut()
            .resource_mut::<Messages<AssignPath>>()
            .write(AssignPath {
                entity: body,
                waypoints: vec![Vec3::new(0.0, 0.0, 10.0)],
            });
        // A zero-delta step runs the assignment but rejects steering, so
        // the reset is observable on its own.
        step(&mut app, 0.0);

        assert_eq!(app.world().get::<LinearVelocity>(body).unwrap().0, Vec3::ZERO);
        assert_eq!(app.world().get::<NavAgent>(body).unwrap().velocity, Vec3::ZERO);
        let path = app.world().get::<NavPath>(body).unwrap();
        assert_eq!(path.front(), Some(Vec3::new(0.0, 0.0, 10.0)));
    }

    #[test]
    fn test_single_waypoint_within_radius_holds() {
        let mut app = test_app();
        // Squared distance 0.25 is inside the default radius of 1.2.
        let (body, _) = spawn_agent(&mut app, Vec3::ZERO, vec![Vec3::new(0.5, 0.0, 0.0)]);
        app.world_mut().get_mut::<LinearVelocity>(body).unwrap().0 = Vec3::new(1.0, 2.0, 3.0);

        for _ in 0..4 {
            step(&mut app, DT);
        }

        // The last waypoint is held, not popped, and the velocity is left
        // alone.
        assert_eq!(app.world().get::<NavPath>(body).unwrap().len(), 1);
        assert_eq!(
            app.world().get::<LinearVelocity>(body).unwrap().0,
            Vec3::new(1.0, 2.0, 3.0)
        );
    }

    #[test]
    fn test_pops_one_waypoint_per_step() {
        let mut app = test_app();
        // The first two waypoints are both inside the arrival radius.
        let (body, _) = spawn_agent(
            &mut app,
            Vec3::ZERO,
            vec![
                Vec3::new(0.5, 0.0, 0.0),
                Vec3::new(0.6, 0.0, 0.0),
                Vec3::new(5.0, 0.0, 0.0),
            ],
        );

        step(&mut app, DT);
        assert_eq!(app.world().get::<NavPath>(body).unwrap().len(), 2);
        assert!(app.world().get::<NavAgent>(body).unwrap().path_travel_started);

        step(&mut app, DT);
        let path = app.world().get::<NavPath>(body).unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path.front(), Some(Vec3::new(5.0, 0.0, 0.0)));
        assert!(!app.world().get::<NavAgent>(body).unwrap().path_travel_started);
    }

    #[test]
    fn test_empty_path_is_noop() {
        let mut app = test_app();
        let (body, visual) = spawn_agent(&mut app, Vec3::ZERO, vec![]);
        let before = app.world().get::<Transform>(visual).unwrap().rotation;

        step(&mut app, DT);

        assert_eq!(app.world().get::<LinearVelocity>(body).unwrap().0, Vec3::ZERO);
        assert_eq!(app.world().get::<Transform>(visual).unwrap().rotation, before);
    }

    #[test]
    fn test_zero_delta_is_rejected() {
        let mut app = test_app();
        let (body, _) = spawn_agent(&mut app, Vec3::ZERO, vec![Vec3::new(10.0, 0.0, 0.0)]);

        step(&mut app, 0.0);

        assert_eq!(app.world().get::<LinearVelocity>(body).unwrap().0, Vec3::ZERO);
        assert_eq!(app.world().get::<NavAgent>(body).unwrap().sighting, Vec3::ZERO);
    }

    #[test]
    fn test_sighting_converges_on_waypoint() {
        let mut app = test_app();
        let target = Vec3::new(10.0, 0.0, 0.0);
        let (body, _) = spawn_agent(&mut app, Vec3::ZERO, vec![target]);

        let mut previous = target.length();
        for _ in 0..100 {
            step(&mut app, DT);
            let sighting = app.world().get::<NavAgent>(body).unwrap().sighting;
            let remaining = (target - sighting).length();
            assert!(remaining < previous);
            previous = remaining;
        }
        assert!(previous < 0.01);
    }

    #[test]
    fn test_facing_tracks_sighting() {
        let mut app = test_app();
        let (body, visual) = spawn_agent(&mut app, Vec3::ZERO, vec![Vec3::new(10.0, 0.0, 0.0)]);

        step(&mut app, DT);

        let rotation = app.world().get::<Transform>(visual).unwrap().rotation;
        assert!((rotation * Vec3::NEG_Z - Vec3::X).length() < 1e-3);

        // The facing is fed back into the physics rotation on the next
        // sync pass.
        step(&mut app, DT);
        let body_rotation = app.world().get::<Rotation>(body).unwrap().0;
        assert!((body_rotation * Vec3::NEG_Z - Vec3::X).length() < 1e-3);
    }
}
