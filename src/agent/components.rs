use bevy::prelude::*;

/// Component that steers a dynamic rigid body along a
/// [`NavPath`](crate::path::NavPath).
///
/// The agent entity carries the avian3d body components; the visual mesh
/// lives on a separate entity referenced by [`visual`](Self::visual). Each
/// frame the body's translation is copied onto the visual, the visual's
/// rotation is copied back onto the rotation-locked body, and the steering
/// rule commands a new linear velocity toward the front waypoint.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component, Default)]
pub struct NavAgent {
    /// The visual mesh entity this agent drives.
    pub visual: Entity,

    /// Steering gain applied to the normalized direction toward the front
    /// waypoint.
    ///
    /// The commanded body velocity is `direction * speed * delta`, so the
    /// effective speed depends on the frame delta: the default of 500.0
    /// moves roughly 8 units per second at 60 FPS.
    pub speed: f32,

    /// Squared distance below which the front waypoint counts as reached.
    ///
    /// Note the units: this is compared against the squared offset length,
    /// never against a linear distance.
    pub arrival_radius_sq: f32,

    /// Exponential approach rate of the sighting position toward the front
    /// waypoint, in lerp factor per second.
    pub sighting_rate: f32,

    /// Last commanded velocity, before delta scaling. Not necessarily the
    /// body's true velocity.
    pub velocity: Vec3,

    /// Smoothed look-at target the visual mesh faces. Trails the raw
    /// waypoint so the facing does not snap when the path advances.
    pub sighting: Vec3,

    /// Toggled every time a waypoint is consumed. Kept as externally
    /// observable state; nothing in this crate reads it.
    pub path_travel_started: bool,
}

impl Default for NavAgent {
    fn default() -> Self {
        Self {
            visual: Entity::PLACEHOLDER,
            speed: 500.0,
            arrival_radius_sq: 1.2,
            sighting_rate: 5.0,
            velocity: Vec3::ZERO,
            sighting: Vec3::ZERO,
            path_travel_started: false,
        }
    }
}

impl NavAgent {
    /// Create a new agent driving the given visual entity.
    pub fn new(visual: Entity) -> Self {
        Self {
            visual,
            ..default()
        }
    }

    /// Set the steering gain.
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Set the squared arrival radius.
    pub fn with_arrival_radius_sq(mut self, radius_sq: f32) -> Self {
        self.arrival_radius_sq = radius_sq;
        self
    }

    /// Set the sighting approach rate.
    pub fn with_sighting_rate(mut self, rate: f32) -> Self {
        self.sighting_rate = rate;
        self
    }
}

/// Message that assigns a new path to an agent, replacing any current one.
///
/// Assignment clears the body's accumulated forces and zeroes both its
/// linear velocity and the agent's commanded velocity: a fresh path must
/// not inherit momentum from the previous one. An empty waypoint list
/// brings the agent to a halt.
#[derive(Message, Debug, Clone)]
pub struct AssignPath {
    /// The agent entity (the one carrying [`NavAgent`]).
    pub entity: Entity,
    /// Waypoints in visit order.
    pub waypoints: Vec<Vec3>,
}

/// Message emitted when an agent passes a milestone on its path.
#[derive(Message, Debug, Clone)]
pub struct NavAgentEvent {
    /// The entity with the [`NavAgent`] component.
    pub entity: Entity,
    /// The type of event.
    pub kind: NavAgentEventKind,
}

/// Types of agent events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAgentEventKind {
    /// A new path was assigned via [`AssignPath`].
    PathAssigned,
    /// The agent came within the arrival radius of the front waypoint and
    /// advanced to the next one.
    WaypointReached,
}
