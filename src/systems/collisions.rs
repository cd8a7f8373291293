//! Locomotion domain: the ground probe, one deterministic query per tick.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::components::{GameLayer, GroundContact, MovementConfigHandle};
use crate::controller::MovementState;

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<
        (
            &Transform,
            &Collider,
            &MovementConfigHandle,
            &mut GroundContact,
        ),
        With<MovementState>,
    >,
) {
    // Only walkable geometry counts (not enemies, sensors, etc.)
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, collider, config, mut contact) in &mut query {
        let (half_width, half_height) = match collider.shape_scaled().as_cuboid() {
            Some(c) => (c.half_extents.x, c.half_extents.y),
            None => (12.0, 24.0),
        };

        let feet = transform.translation.truncate() - Vec2::new(0.0, half_height);
        let edge = (half_width - config.ground_probe_inset).max(0.0);

        // Three short rays across the foot span so standing on a ledge edge
        // still registers as grounded.
        contact.0 = [-edge, 0.0, edge].into_iter().any(|dx| {
            spatial_query
                .cast_ray(
                    feet + Vec2::new(dx, 0.0),
                    Dir2::NEG_Y,
                    config.ground_probe_distance,
                    true,
                    &ground_filter,
                )
                .is_some()
        });
    }
}
