use std::collections::VecDeque;

use bevy::prelude::*;

/// An ordered queue of waypoints for an agent to visit.
///
/// The front of the queue is the next target. Waypoints are consumed
/// front-to-back as they are reached; the queue is replaced wholesale when
/// a new path is assigned. An empty (or absent) queue means the agent has
/// nowhere to go.
///
/// The queue holds positions only; computing them (pathfinding, click-to-move
/// picking) is the caller's concern.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component, Default)]
pub struct NavPath {
    waypoints: VecDeque<Vec3>,
}

impl NavPath {
    /// Create a path from waypoints in visit order.
    pub fn new(waypoints: impl IntoIterator<Item = Vec3>) -> Self {
        Self {
            waypoints: waypoints.into_iter().collect(),
        }
    }

    /// The next waypoint to move toward, if any.
    pub fn front(&self) -> Option<Vec3> {
        self.waypoints.front().copied()
    }

    /// Remove and return the front waypoint.
    pub fn pop_front(&mut self) -> Option<Vec3> {
        self.waypoints.pop_front()
    }

    /// Replace the whole path, keeping the allocation.
    pub fn replace(&mut self, waypoints: impl IntoIterator<Item = Vec3>) {
        self.waypoints.clear();
        self.waypoints.extend(waypoints);
    }

    /// Number of waypoints remaining.
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// True when no waypoints remain.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Drop all remaining waypoints.
    pub fn clear(&mut self) {
        self.waypoints.clear();
    }
}
