use crate::engine::host::LayerMask;
use rapier3d::prelude::*;

/// Collision layers used to filter contacts and ray queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionLayer {
    /// Default layer - interacts with everything
    Default = 0b0001,

    /// Player characters
    Player = 0b0010,

    /// Walkable surfaces the ground probe looks for
    Ground = 0b0100,

    /// Trigger volumes - detect overlaps, never block or ground
    Trigger = 0b1000,
}

impl CollisionLayer {
    pub fn mask(self) -> LayerMask {
        LayerMask(self as u32)
    }

    /// Convert to rapier's InteractionGroups
    pub fn to_interaction_groups(self) -> InteractionGroups {
        let memberships = Group::from_bits_truncate(self as u32);

        let filter = match self {
            // Players stand on ground and can enter triggers, but pass through each other
            CollisionLayer::Player => Group::from_bits_truncate(
                CollisionLayer::Default as u32
                    | CollisionLayer::Ground as u32
                    | CollisionLayer::Trigger as u32,
            ),

            CollisionLayer::Ground => Group::from_bits_truncate(
                CollisionLayer::Default as u32 | CollisionLayer::Player as u32,
            ),

            CollisionLayer::Trigger => Group::from_bits_truncate(CollisionLayer::Player as u32),

            CollisionLayer::Default => Group::ALL,
        };

        InteractionGroups::new(memberships, filter)
    }
}

/// Interaction groups for a ray query restricted to `layers`
pub fn query_groups(layers: LayerMask) -> InteractionGroups {
    InteractionGroups::new(Group::ALL, Group::from_bits_truncate(layers.bits()))
}
