use bevy::prelude::*;
use bevy::math::primitives::{Sphere, Cuboid};

use crate::phase::geometry::{dimension, dimension_label, energy_radius, hypersphere_volume, hypersurface_area};
use crate::phase::sampler::{sample_shell, cell_size_hint, PhasePointSet};
use crate::phase::scene::Scene;
use crate::projection::projector::{project_3d, ProjectionKind, NVec3};

/// Component tagging each point entity with its index into the projected set
#[derive(Component)]
struct PointIndex(pub usize);

/// Marker for the on-screen stats text
#[derive(Component)]
struct StatsText;

/// World-space → screen-space scaling factor for positions and sizes
const SCALE3D: f32 = 200.0;

/// Distance of the camera from the origin along +Z
const CAMERA_DISTANCE: f32 = 800.0;

/// Visual radius of one projected point, in world units
const POINT_RADIUS: f32 = 0.004 * SCALE3D;

/// Current sample and its 3D projection, rebuilt on every resample or
/// strategy switch. `dirty` tells the sync system to push new transforms
#[derive(Resource)]
struct CloudState {
    set: PhasePointSet,
    projected: Vec<NVec3>,
    dirty: bool,
}

/// Convenience entrypoint: sample, project, and open the viewer
pub fn run_3d(scene: Scene) {
    println!(
        "run_3d: starting Bevy viewer, {} samples in {} dims",
        scene.params.samples,
        dimension(scene.params.particles)
    );

    let set = sample_shell(&scene.params);
    let projected = project_3d(&set, scene.projection);
    let cloud = CloudState {
        set,
        projected,
        dirty: false,
    };

    App::new()
        .insert_resource(scene)
        .insert_resource(cloud)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_3d)
        .add_systems(Update, (handle_keys, sync_points))
        .run();
}

/// Startup system: spawn camera, light, axis frame, one mesh per projected
/// point, and the stats overlay
fn setup_3d(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scene: Res<Scene>,
    cloud: Res<CloudState>,
) {
    // Simple 3D camera looking at the origin
    commands.spawn(Camera3dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::srgb(0.0, 0.0, 0.0)), // pure black
            ..Default::default()
        },
        transform: Transform::from_xyz(0.6 * SCALE3D, 0.45 * SCALE3D, CAMERA_DISTANCE)
            .looking_at(Vec3::ZERO, Vec3::Y),
        ..Default::default()
    });

    // Basic point light
    commands.spawn(PointLightBundle {
        point_light: PointLight {
            intensity: 1500.0,
            range: 1000.0,
            ..Default::default()
        },
        transform: Transform::from_xyz(100.0, 100.0, CAMERA_DISTANCE),
        ..Default::default()
    });

    // Coordinate frame: three thin boxes along X, Y, Z
    if scene.view.show_frame {
        let frame_len = (1.2 * energy_radius(&scene.params)) as f32 * SCALE3D;
        spawn_axes(&mut commands, &mut meshes, &mut materials, frame_len);
    }

    // One shared mesh and material for every point; Bevy batches these.
    // Microcell mode swaps the sphere for a cube with the cell-hint edge
    let point_mesh = if scene.view.show_cells {
        let edge = cell_size_hint(&scene.params) as f32 * SCALE3D;
        meshes.add(Cuboid::new(edge, edge, edge).mesh())
    } else {
        meshes.add(Sphere::new(POINT_RADIUS).mesh())
    };
    let point_material = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 1.0, 1.0), // white
        unlit: true,
        ..Default::default()
    });

    for (i, p) in cloud.projected.iter().enumerate() {
        commands.spawn((
            PbrBundle {
                mesh: point_mesh.clone(),
                material: point_material.clone(),
                transform: point_transform(p),
                ..Default::default()
            },
            PointIndex(i),
        ));
    }

    // Stats overlay (top-left): geometry readouts plus key bindings
    commands.spawn((
        TextBundle::from_section(
            stats_string(&scene, cloud.set.count),
            TextStyle {
                font_size: 18.0,
                color: Color::srgb(0.9, 0.9, 0.9),
                ..Default::default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..Default::default()
        }),
        StatsText,
    ));
}

/// Keyboard controls:
/// 1/2/3 switch the projection strategy (axes / random / PCA),
/// R bumps the sampling seed and resamples
fn handle_keys(
    keys: Res<ButtonInput<KeyCode>>,
    mut scene: ResMut<Scene>,
    mut cloud: ResMut<CloudState>,
) {
    let mut resample = false;
    let mut reproject = false;

    if keys.just_pressed(KeyCode::Digit1) {
        scene.projection = ProjectionKind::Axes { i: 0, j: 1, k: 2 };
        reproject = true;
    }
    if keys.just_pressed(KeyCode::Digit2) {
        let seed = scene.proj_seed;
        scene.projection = ProjectionKind::Random { seed };
        reproject = true;
    }
    if keys.just_pressed(KeyCode::Digit3) {
        scene.projection = ProjectionKind::Pca;
        reproject = true;
    }
    if keys.just_pressed(KeyCode::KeyR) {
        scene.params.seed = scene.params.seed.wrapping_add(1);
        resample = true;
    }

    if resample {
        cloud.set = sample_shell(&scene.params);
    }
    if resample || reproject {
        cloud.projected = project_3d(&cloud.set, scene.projection);
        cloud.dirty = true;
    }
}

/// Push new positions and stats after a resample or strategy switch
fn sync_points(
    scene: Res<Scene>,
    mut cloud: ResMut<CloudState>,
    mut points: Query<(&PointIndex, &mut Transform)>,
    mut texts: Query<&mut Text, With<StatsText>>,
) {
    if !cloud.dirty {
        return;
    }

    for (PointIndex(i), mut transform) in &mut points {
        if let Some(p) = cloud.projected.get(*i) {
            *transform = point_transform(p);
        }
    }

    for mut text in &mut texts {
        text.sections[0].value = stats_string(&scene, cloud.set.count);
    }

    cloud.dirty = false;
}

fn point_transform(p: &NVec3) -> Transform {
    Transform::from_xyz(
        (p.x as f32) * SCALE3D,
        (p.y as f32) * SCALE3D,
        (p.z as f32) * SCALE3D,
    )
}

fn projection_name(kind: ProjectionKind) -> &'static str {
    match kind {
        ProjectionKind::Axes { .. } => "axes",
        ProjectionKind::Random { .. } => "random",
        ProjectionKind::Pca => "pca",
    }
}

/// Readout shown in the overlay: D, R, volume, area, point count, strategy
fn stats_string(scene: &Scene, count: usize) -> String {
    let d = dimension(scene.params.particles);
    let r = energy_radius(&scene.params);
    format!(
        "D = {}\nR = sqrt(2 m E) = {:.4}\nomega_D(R) = {:.4e}\nsigma_D-1(R) = {:.4e}\npoints: {}\nprojection: {}  [1: axes  2: random  3: pca  R: resample]",
        dimension_label(d),
        r,
        hypersphere_volume(d, r),
        hypersurface_area(d, r),
        count,
        projection_name(scene.projection),
    )
}

// =========================================================================================
// Coordinate frame
// =========================================================================================

fn spawn_axes(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    axis_len: f32,
) {
    let axis_thickness = 0.004 * SCALE3D;

    // X axis: red, along +X/-X
    commands.spawn(PbrBundle {
        mesh: meshes.add(Cuboid::new(axis_len, axis_thickness, axis_thickness).mesh()),
        material: materials.add(StandardMaterial {
            base_color: Color::srgb(1.0, 0.0, 0.0), // red
            unlit: true,
            ..Default::default()
        }),
        // Cuboid is centered at its transform origin, so this puts it crossing the world origin
        transform: Transform::from_xyz(0.0, 0.0, 0.0),
        ..Default::default()
    });

    // Y axis: green, along +Y/-Y
    commands.spawn(PbrBundle {
        mesh: meshes.add(Cuboid::new(axis_thickness, axis_len, axis_thickness).mesh()),
        material: materials.add(StandardMaterial {
            base_color: Color::srgb(0.0, 1.0, 0.0), // green
            unlit: true,
            ..Default::default()
        }),
        transform: Transform::from_xyz(0.0, 0.0, 0.0),
        ..Default::default()
    });

    // Z axis: blue, along +Z/-Z
    commands.spawn(PbrBundle {
        mesh: meshes.add(Cuboid::new(axis_thickness, axis_thickness, axis_len).mesh()),
        material: materials.add(StandardMaterial {
            base_color: Color::srgb(0.0, 0.0, 1.0), // blue
            unlit: true,
            ..Default::default()
        }),
        transform: Transform::from_xyz(0.0, 0.0, 0.0),
        ..Default::default()
    });
}
