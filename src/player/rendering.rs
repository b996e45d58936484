//! Player-specific rendering: filled ship mesh and gizmo outline.
//!
//! | Layer            | Technology | Notes                               |
//! |------------------|------------|-------------------------------------|
//! | Ship fill        | `Mesh2d`   | attached once on spawn              |
//! | Ship outline     | Gizmos     | blinks while invincible             |

use super::state::{Invincibility, Player};
use crate::constants::INVINCIBILITY_BLINK_HZ;
use crate::geometry::CircleShape;
use crate::rendering::filled_polygon_mesh;
use bevy::prelude::*;

// ── Ship geometry ─────────────────────────────────────────────────────────────

/// Local-space vertices of the ship triangle for a ship of `radius`.
///
/// The nose points along local +Y at distance `radius`; the two rear corners
/// sit `radius` behind the centre and `radius / 1.5` to either side.
pub fn ship_vertices(radius: f32) -> [Vec2; 3] {
    let half_width = radius / 1.5;
    [
        Vec2::new(0.0, radius),
        Vec2::new(-half_width, -radius),
        Vec2::new(half_width, -radius),
    ]
}

// ── Spawn-time mesh attachment ────────────────────────────────────────────────

/// Attach a filled `Mesh2d` triangle to the ship on spawn.
///
/// Runs only once per player entity (via [`Added<Player>`]).  The mesh
/// follows the entity `Transform`, so heading changes rotate it for free.
pub fn attach_player_ship_mesh_system(
    mut commands: Commands,
    query: Query<(Entity, &CircleShape), Added<Player>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    for (entity, shape) in query.iter() {
        let mesh_handle = meshes.add(filled_polygon_mesh(&ship_vertices(shape.radius)));
        let mat_handle = materials.add(ColorMaterial::from_color(Color::srgb(0.08, 0.30, 0.32)));
        commands
            .entity(entity)
            .insert((Mesh2d(mesh_handle), MeshMaterial2d(mat_handle)));
    }
}

// ── Gizmo outline ─────────────────────────────────────────────────────────────

/// Draw the ship outline.  While invincible the outline blinks and the fill
/// is hidden on the "off" half of each blink.
pub fn player_gizmo_system(
    mut gizmos: Gizmos,
    mut q: Query<(&Transform, &CircleShape, &Invincibility, &mut Visibility), With<Player>>,
    time: Res<Time>,
) {
    let Ok((transform, shape, invincibility, mut visibility)) = q.single_mut() else {
        return;
    };

    let blink_off = invincibility.is_active()
        && (time.elapsed_secs() * INVINCIBILITY_BLINK_HZ).fract() < 0.5;
    let wanted = if blink_off {
        Visibility::Hidden
    } else {
        Visibility::Inherited
    };
    if *visibility != wanted {
        *visibility = wanted;
    }
    if blink_off {
        return;
    }

    let pos = transform.translation.truncate();
    let rot = transform.rotation;
    let [a, b, c] = ship_vertices(shape.radius);
    let world = |v: Vec2| pos + rot.mul_vec3(v.extend(0.0)).truncate();
    gizmos.linestrip_2d([world(a), world(b), world(c), world(a)], Color::WHITE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nose_is_at_radius_along_local_y() {
        let [nose, left, right] = ship_vertices(20.0);
        assert_eq!(nose, Vec2::new(0.0, 20.0));
        assert_eq!(left.y, -20.0);
        assert_eq!(right.y, -20.0);
        assert!((left.x + right.x).abs() < f32::EPSILON);
    }
}
