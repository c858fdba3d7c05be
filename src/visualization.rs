use bevy::asset::RenderAssetUsages;
use bevy::color::palettes::css::*;
use bevy::prelude::*;
use bevy::render::render_resource::PrimitiveTopology;

use crate::constants::LANDER_WIDTH;
use crate::input::DebugOptions;
use crate::simulation::GameWorld;

#[derive(Component)]
pub struct MainCamera;

#[derive(Component)]
pub struct LanderSprite;

#[derive(Component)]
pub struct TerrainStrip;

// Lunar lander model as line segments (consecutive pairs of vertices), in
// the original arcade artwork's coordinate system with y increasing
// downward. Remapped to world units around the origin when the mesh is
// built.
const LANDER_VERTS: &[[f32; 2]] = &[
    [165.0, 859.0],
    [157.0, 852.0],
    [157.0, 852.0],
    [157.0, 842.0],
    [157.0, 842.0],
    [166.0, 834.0],
    [166.0, 834.0],
    [183.0, 834.0],
    [183.0, 834.0],
    [191.0, 843.0],
    [191.0, 843.0],
    [191.0, 852.0],
    [191.0, 852.0],
    [182.0, 859.0],
    [157.0, 859.0],
    [191.0, 859.0],
    [191.0, 859.0],
    [191.0, 873.0],
    [191.0, 873.0],
    [157.0, 873.0],
    [157.0, 873.0],
    [157.0, 859.0],
    [191.0, 866.0],
    [195.0, 880.0],
    [195.0, 880.0],
    [185.0, 873.0],
    [172.0, 873.0],
    [168.0, 881.0],
    [168.0, 881.0],
    [179.0, 881.0],
    [179.0, 881.0],
    [175.0, 873.0],
    [157.0, 866.0],
    [153.0, 880.0],
    [153.0, 880.0],
    [162.0, 873.0],
    [153.0, 880.0],
    [153.0, 889.0],
    [147.0, 889.0],
    [158.0, 889.0],
    [195.0, 880.0],
    [195.0, 889.0],
    [189.0, 889.0],
    [201.0, 889.0],
    [168.0, 881.0],
    [178.0, 881.0],
];

fn line_mesh(topology: PrimitiveTopology, vertices: Vec<[f32; 3]>) -> Mesh {
    let count = vertices.len();
    let mut mesh = Mesh::new(topology, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vertices);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, vec![[0.0, 0.0, 1.0]; count]);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, vec![[0.0, 0.0]; count]);
    mesh
}

/// Builds the lander model centred at the origin with width `LANDER_WIDTH`,
/// flipping y since the artwork has y increasing downward.
fn lander_mesh() -> Mesh {
    let (mut min, mut max) = (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY));
    for v in LANDER_VERTS {
        min = min.min(Vec2::from_array(*v));
        max = max.max(Vec2::from_array(*v));
    }

    let s = LANDER_WIDTH / (max.x - min.x);
    let centre = (min + max) / 2.0;
    let vertices = LANDER_VERTS
        .iter()
        .map(|v| [(v[0] - centre.x) * s, -(v[1] - centre.y) * s, 0.0])
        .collect();

    line_mesh(PrimitiveTopology::LineList, vertices)
}

fn terrain_mesh(world: &GameWorld) -> Mesh {
    let vertices = world
        .terrain
        .points()
        .iter()
        .map(|p| [p.x, p.y, 0.0])
        .collect();
    line_mesh(PrimitiveTopology::LineStrip, vertices)
}

pub fn spawn_visualization(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    world: Res<GameWorld>,
) {
    commands.spawn((Camera2d, MainCamera));

    commands.spawn((
        Mesh2d(meshes.add(lander_mesh())),
        MeshMaterial2d(materials.add(ColorMaterial::from_color(WHITE))),
        Transform::from_translation(world.lander.centre_position().extend(1.0)),
        LanderSprite,
    ));

    commands.spawn((
        Mesh2d(meshes.add(terrain_mesh(&world))),
        MeshMaterial2d(materials.add(ColorMaterial::from_color(LIGHT_GRAY))),
        Transform::from_xyz(0.0, 0.0, 0.0),
        TerrainStrip,
    ));
}

pub fn update_lander_transform(
    world: Res<GameWorld>,
    mut query: Query<&mut Transform, With<LanderSprite>>,
) {
    if let Ok(mut transform) = query.get_single_mut() {
        let pos = world.lander.centre_position();
        transform.translation.x = pos.x;
        transform.translation.y = pos.y;
        // The model's nose points along -y, a quarter turn from the
        // orientation reference heading.
        transform.rotation =
            Quat::from_rotation_z(world.lander.orientation + std::f32::consts::FRAC_PI_2);
    }
}

/// Applies the session's view transform to the camera: the wide view spans
/// the whole terrain strip, the zoomed view is centred on the lander.
pub fn update_camera(
    world: Res<GameWorld>,
    windows: Query<&Window>,
    mut query: Query<(&mut Transform, &mut OrthographicProjection), With<MainCamera>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok((mut transform, mut projection)) = query.get_single_mut() else {
        return;
    };

    let view = world.view_transform();
    transform.translation.x = view.center.x;
    transform.translation.y = view.center.y;
    projection.scale = 2.0 * view.half_width / window.width();
}

pub fn draw_debug(mut gizmos: Gizmos, world: Res<GameWorld>, debug: Res<DebugOptions>) {
    if debug.show_closest_point {
        gizmos.line_2d(
            world.closest_terrain_point(),
            world.lander.centre_position(),
            YELLOW,
        );
    }
}
