//! Collaborator seams between the formation and the surrounding game.

use onslaught_core::types::ProjectileRequest;
use onslaught_core::unit::Unit;

/// Renderer collaborator: receives each live unit on `Formation::draw`.
pub trait UnitRenderer {
    fn draw_unit(&mut self, unit: &Unit);
}

/// Destination for projectile requests emitted by a firing unit.
///
/// The original entry points differed only in the collection they
/// filled; any collection that implements this trait can receive a
/// volley.
pub trait ProjectileSink {
    fn push(&mut self, projectile: ProjectileRequest);
}

impl ProjectileSink for Vec<ProjectileRequest> {
    fn push(&mut self, projectile: ProjectileRequest) {
        Vec::push(self, projectile);
    }
}
