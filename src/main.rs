use bevy::prelude::*;
use ripple2d::config::constants;
use ripple2d::{Cell, RipplePlugin, WaveState};

const CELL_PIXELS: f32 = 24.0;

#[derive(Component)]
struct CellVisual {
    x: usize,
    y: usize,
}

fn cell_to_world(x: usize, y: usize, display: usize) -> Vec3 {
    let half = display as f32 * CELL_PIXELS / 2.0;
    Vec3::new(
        x as f32 * CELL_PIXELS - half + CELL_PIXELS / 2.0,
        half - y as f32 * CELL_PIXELS - CELL_PIXELS / 2.0,
        0.0,
    )
}

/// Gray ramp from height, tinted red by acceleration and blue by velocity.
fn cell_color(cell: &Cell) -> Color {
    let brightness = constants::BASE_BRIGHTNESS + cell.height * constants::HEIGHT_BRIGHTNESS_SCALE;
    let base = (brightness / 255.0).clamp(0.0, 1.0);

    let red = (base + cell.acceleration * 0.002).clamp(0.0, 1.0);
    let blue = (base + cell.velocity * 0.02).clamp(0.0, 1.0);

    Color::srgb(red, base, blue)
}

fn init(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    state: Res<WaveState>,
) {
    commands.spawn(Camera2d);

    // Named `display_size` rather than `display`: tracing's `info!` expands
    // with its own `display` helper in scope, which shadows a local of that
    // name inside the macro.
    let display_size = state.params().display_size;
    let physical = state.params().physical_size;
    info!("ripple2d: {display_size}x{display_size} window over a {physical}x{physical} lattice");

    let quad = meshes.add(Rectangle::new(CELL_PIXELS, CELL_PIXELS));
    for y in 0..display_size {
        for x in 0..display_size {
            commands.spawn((
                CellVisual { x, y },
                Mesh2d(quad.clone()),
                MeshMaterial2d(materials.add(Color::BLACK)),
                Transform::from_translation(cell_to_world(x, y, display_size)),
            ));
        }
    }
}

fn update_cell_colors(
    state: Res<WaveState>,
    query: Query<(&CellVisual, &MeshMaterial2d<ColorMaterial>)>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let offset = state.params().display_offset;
    for (visual, material) in &query {
        let cell = state.grid().get(visual.x + offset, visual.y + offset);
        if let Some(material) = materials.get_mut(&material.0) {
            material.color = cell_color(cell);
        }
    }
}

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(RipplePlugin::default())
        .insert_resource(Time::<Fixed>::from_hz(30.0))
        .add_systems(Startup, init)
        .add_systems(Update, update_cell_colors)
        .run();
}
