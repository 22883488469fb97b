//! Waypoint navigation example.
//!
//! A capsule agent patrols canned routes on a flat slab, steered through
//! its physics body.
//!
//! Run with: `cargo run --example nav_agent`

use avian3d::prelude::*;
use bevy::prelude::*;
use bevy_nav_agent_3d::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(PhysicsPlugins::default())
        .add_plugins(NavPathPlugin)
        .add_plugins(NavAgentPlugin)
        .add_systems(Startup, setup)
        .add_systems(Update, (handle_input, log_agent_events))
        .run();
}

#[derive(Resource)]
struct DemoAgent(Entity);

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Camera
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 18.0, 22.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Lighting
    commands.spawn(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        affects_lightmapped_meshes: true,
    });

    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Ground slab the agent walks on
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(40.0, 0.5, 40.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.3, 0.3, 0.3),
            ..default()
        })),
        Transform::from_xyz(0.0, -0.25, 0.0),
        RigidBody::Static,
        Collider::cuboid(40.0, 0.5, 40.0),
    ));

    let agent = spawn_nav_agent(
        &mut commands,
        &mut meshes,
        &mut materials,
        Vec3::new(0.0, 1.0, 0.0),
    );
    commands.insert_resource(DemoAgent(agent.body));

    println!("\n=== Waypoint Navigation Example ===");
    println!("1  - Patrol the slab perimeter");
    println!("2  - Walk to the far edge");
    println!("0  - Clear the path (stop)");
    println!("===================================\n");
}

fn handle_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    agent: Res<DemoAgent>,
    mut paths: MessageWriter<AssignPath>,
) {
    if keyboard.just_pressed(KeyCode::Digit1) {
        paths.write(AssignPath {
            entity: agent.0,
            waypoints: vec![
                Vec3::new(8.0, 1.0, 0.0),
                Vec3::new(8.0, 1.0, 8.0),
                Vec3::new(-8.0, 1.0, 8.0),
                Vec3::new(-8.0, 1.0, -8.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
        });
    }

    if keyboard.just_pressed(KeyCode::Digit2) {
        paths.write(AssignPath {
            entity: agent.0,
            waypoints: vec![Vec3::new(0.0, 1.0, -15.0)],
        });
    }

    if keyboard.just_pressed(KeyCode::Digit0) {
        paths.write(AssignPath {
            entity: agent.0,
            waypoints: Vec::new(),
        });
    }
}

fn log_agent_events(mut events: MessageReader<NavAgentEvent>) {
    for event in events.read() {
        match event.kind {
            NavAgentEventKind::PathAssigned => {
                println!("[{:?}] New path assigned", event.entity);
            }
            NavAgentEventKind::WaypointReached => {
                println!("[{:?}] Waypoint reached", event.entity);
            }
        }
    }
}
