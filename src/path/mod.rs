//! Waypoint path data consumed by navigation agents.

mod components;

pub use components::*;

use bevy::prelude::*;

/// Plugin that registers path types for reflection/serialization.
/// This plugin carries no systems - paths are plain data consumed by
/// [`NavAgentPlugin`](crate::agent::NavAgentPlugin).
pub struct NavPathPlugin;

impl Plugin for NavPathPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<NavPath>();
    }
}
