use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;
use bevy::window::{PrimaryWindow, WindowResolution};

use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, Color as BodyColor, NVec2};
use crate::simulation::world::World;

#[derive(Component)]
struct BodyIndex(pub usize);

#[derive(Component)]
struct StatsText;

/// Index of the body most recently kicked by a click, shown in the overlay
#[derive(Resource, Default)]
struct LastKicked(Option<usize>);

pub fn run_2d(scenario: Scenario) {
    let params = scenario.world.params();
    let (width, height) = (params.width as f32, params.height as f32);
    println!("run_2d: starting Bevy 2D viewer with {} bodies", scenario.world.len());

    App::new()
        .insert_resource(scenario)
        .init_resource::<LastKicked>()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "circlesim".into(),
                // World units map 1:1 to logical pixels
                resolution: WindowResolution::new(width, height),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, setup_bodies_system)
        .add_systems(
            Update,
            (click_system, physics_step_system, sync_transforms_system, stats_text_system).chain(),
        )
        .run();
}

/// Map a world point (origin top-left, y down) to the 2D camera's frame
/// (origin at the window center, y up).
pub fn world_to_screen(p: NVec2, width: f64, height: f64) -> Vec2 {
    Vec2::new((p.x - 0.5 * width) as f32, (0.5 * height - p.y) as f32)
}

fn to_bevy_color(c: BodyColor) -> Color {
    Color::srgba_u8(c.r, c.g, c.b, c.a)
}

const STATS_FONT_SIZE: f32 = 12.0;

/// Overlay header: time, body count and total kinetic energy
pub fn stats_header(world: &World) -> String {
    format!(
        "t = {:.2} s   Total Bodies: {}   KE = {:.0}",
        world.time(),
        world.len(),
        world.total_kinetic_energy()
    )
}

/// One overlay line with every field of a body and its derived values.
///
/// `kicked` marks the body most recently hit by a click.
pub fn body_summary(index: usize, body: &Body, kicked: bool) -> String {
    let marker = if kicked { '>' } else { ' ' };
    format!(
        "{marker}Body {index}: pos ({:.1}, {:.1})  vel ({:.1}, {:.1})  acc ({:.1}, {:.1})  \
         m {:.2}  r {:.1}  speed {:.1}  accel {:.1}  KE {:.0}",
        body.x.x,
        body.x.y,
        body.v.x,
        body.v.y,
        body.a.x,
        body.a.y,
        body.mass(),
        body.radius(),
        body.speed(),
        body.a.norm(),
        body.kinetic_energy()
    )
}

/// Full overlay as plain text: the header, then one line per body
pub fn stats_summary(world: &World, last_kicked: Option<usize>) -> String {
    let mut text = stats_header(world);
    for (i, body) in world.bodies().iter().enumerate() {
        text.push('\n');
        text.push_str(&body_summary(i, body, last_kicked == Some(i)));
    }
    text
}

fn setup_bodies_system(mut commands: Commands, scenario: Res<Scenario>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    let params = scenario.world.params();
    for (i, body) in scenario.world.bodies().iter().enumerate() {
        let pos = world_to_screen(body.x, params.width, params.height);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(body.radius() as f32))),
                material: materials.add(ColorMaterial::from(to_bevy_color(body.color))),
                transform: Transform::from_xyz(pos.x, pos.y, 0.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }

    commands.spawn((
        TextBundle::from_section("", stats_style(Color::WHITE))
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(8.0),
            ..Default::default()
        }),
        StatsText,
    ));
}

fn click_system(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut scenario: ResMut<Scenario>,
    mut last_kicked: ResMut<LastKicked>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    // Window coordinates already share the world's origin and orientation
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    let point = NVec2::new(cursor.x as f64, cursor.y as f64);
    if let Some(i) = scenario.world.kick_at(point) {
        last_kicked.0 = Some(i);
    }
}

fn physics_step_system(time: Res<Time>, mut scenario: ResMut<Scenario>) {
    scenario.world.step(time.delta_seconds_f64());
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    let params = scenario.world.params();
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = scenario.world.body(*i) {
            let pos = world_to_screen(b.x, params.width, params.height);
            transform.translation.x = pos.x;
            transform.translation.y = pos.y;
        }
    }
}

fn stats_text_system(scenario: Res<Scenario>, last_kicked: Res<LastKicked>, mut query: Query<&mut Text, With<StatsText>>) {
    let world = &scenario.world;
    for mut text in &mut query {
        // Header in white, then each body's line in its own color as a swatch
        let mut sections = Vec::with_capacity(world.len() + 1);
        sections.push(TextSection::new(stats_header(world), stats_style(Color::WHITE)));
        for (i, body) in world.bodies().iter().enumerate() {
            sections.push(TextSection::new(
                format!("\n{}", body_summary(i, body, last_kicked.0 == Some(i))),
                stats_style(to_bevy_color(body.color)),
            ));
        }
        text.sections = sections;
    }
}

fn stats_style(color: Color) -> TextStyle {
    TextStyle {
        font_size: STATS_FONT_SIZE,
        color,
        ..Default::default()
    }
}
