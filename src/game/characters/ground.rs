// Ground contact predicate

use crate::engine::host::{GroundRay, LayerMask, SpatialQuery};
use glam::Vec3;

/// How far below the body origin the probe ray starts
pub const PROBE_OFFSET: f32 = 1.0;
/// Maximum ray length
pub const PROBE_MAX_DISTANCE: f32 = 5.0;
/// A hit must be closer than this to count as standing on the ground
pub const GROUND_CUTOFF: f32 = 0.05;

/// Outcome of one ground probe
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GroundContact {
    /// Hit within the cutoff
    Grounded(f32),
    /// Hit within ray range but beyond the cutoff
    Airborne(f32),
    /// Nothing on the ground layer within ray range
    NoHit,
}

impl GroundContact {
    pub fn is_grounded(self) -> bool {
        matches!(self, Self::Grounded(_))
    }
}

/// Downward ray cast against the ground layer.
///
/// Two distances matter: the ray length bounds the search, the cutoff decides
/// contact. A surface 1 unit below the feet is a hit, but not ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundProbe {
    pub layers: LayerMask,
    pub offset: f32,
    pub max_distance: f32,
    pub cutoff: f32,
}

impl GroundProbe {
    pub fn new(layers: LayerMask) -> Self {
        Self {
            layers,
            offset: PROBE_OFFSET,
            max_distance: PROBE_MAX_DISTANCE,
            cutoff: GROUND_CUTOFF,
        }
    }

    /// The ray this probe casts for a body at `position`
    pub fn ray(&self, position: Vec3) -> GroundRay {
        GroundRay {
            origin: position - Vec3::Y * self.offset,
            direction: Vec3::NEG_Y,
            max_distance: self.max_distance,
            layers: self.layers,
            ignore_triggers: true,
        }
    }

    pub fn classify(&self, query: &impl SpatialQuery, position: Vec3) -> GroundContact {
        match query.cast_ray(&self.ray(position)) {
            Some(distance) if distance < self.cutoff => GroundContact::Grounded(distance),
            Some(distance) => GroundContact::Airborne(distance),
            None => {
                log::trace!("ground probe at {position} found nothing");
                GroundContact::NoHit
            }
        }
    }

    pub fn is_grounded(&self, query: &impl SpatialQuery, position: Vec3) -> bool {
        self.classify(query, position).is_grounded()
    }
}
