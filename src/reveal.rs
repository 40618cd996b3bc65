//! One-time reveal of content blocks as they scroll into view.
//!
//! Each block is observed on its own and flips from hidden to revealed the first time it
//! qualifies; scrolling it out and back never hides or re-reveals it. This has nothing to do
//! with the active section.
//!
//! Some mobile browsers never report the intersection for blocks that are already on screen at
//! mount. The mobile policy therefore carries a fallback: a block that has not qualified within
//! a bounded wait after mounting is revealed anyway.

use crate::geometry::{intersect, Extent, Viewport};
use crate::responsive::DeviceType;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq)]
/// When a block counts as visible, and how long to wait before forcing it.
pub struct RevealPolicy {
    /// Minimum fraction of the block that must be inside the band.
    pub threshold: f64,
    /// Units shaved off the bottom of the viewport before intersecting.
    pub bottom_margin: f64,
    /// Forced reveal after this long without qualifying; `None` disables the fallback.
    pub fallback_after: Option<Duration>,
}

impl RevealPolicy {
    #[must_use]
    /// Standard trigger for wide viewports.
    pub const fn desktop() -> Self {
        Self {
            threshold: 0.05,
            bottom_margin: 50.0,
            fallback_after: None,
        }
    }

    #[must_use]
    /// Looser trigger with a two-second forced reveal.
    pub const fn mobile() -> Self {
        Self {
            threshold: 0.01,
            bottom_margin: 20.0,
            fallback_after: Some(Duration::from_secs(2)),
        }
    }

    #[must_use]
    /// Policy for a device class.
    pub const fn for_device(device: DeviceType) -> Self {
        match device {
            DeviceType::Mobile => Self::mobile(),
            DeviceType::Tablet | DeviceType::Desktop => Self::desktop(),
        }
    }

    fn band(&self, viewport: &Viewport) -> Extent {
        let visible = viewport.visible();
        Extent::new(visible.top, visible.height - self.bottom_margin)
    }
}

impl Default for RevealPolicy {
    fn default() -> Self {
        Self::desktop()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Handle of a mounted block.
pub struct BlockId(u32);

#[derive(Clone, Debug)]
struct Block {
    extent: Extent,
    mounted_at: Instant,
    revealed: bool,
}

#[derive(Clone, Debug)]
/// Tracks which blocks have been revealed.
pub struct RevealAnimator {
    policy: RevealPolicy,
    blocks: BTreeMap<BlockId, Block>,
    next_id: u32,
}

impl RevealAnimator {
    #[must_use]
    /// Animator with no blocks.
    pub fn new(policy: RevealPolicy) -> Self {
        Self {
            policy,
            blocks: BTreeMap::new(),
            next_id: 0,
        }
    }

    #[must_use]
    /// Current policy.
    pub fn policy(&self) -> RevealPolicy {
        self.policy
    }

    /// Switches policy, e.g. after the device class changes. Revealed blocks stay revealed.
    pub fn set_policy(&mut self, policy: RevealPolicy) {
        self.policy = policy;
    }

    /// Starts observing a block.
    pub fn mount(&mut self, extent: Extent, now: Instant) -> BlockId {
        let id = BlockId(self.next_id);
        self.next_id += 1;
        self.blocks.insert(
            id,
            Block {
                extent,
                mounted_at: now,
                revealed: false,
            },
        );
        id
    }

    /// Stops observing a block and forgets its state.
    pub fn unmount(&mut self, id: BlockId) {
        self.blocks.remove(&id);
    }

    /// Stops observing every block.
    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    /// Checks every unrevealed block and returns the ones revealed by this pass.
    pub fn observe(&mut self, viewport: &Viewport, now: Instant) -> Vec<BlockId> {
        let band = self.policy.band(viewport);
        let mut fired = Vec::new();
        for (&id, block) in self.blocks.iter_mut().filter(|(_, b)| !b.revealed) {
            let (ratio, intersecting) = intersect(block.extent, band);
            let qualifies = intersecting && ratio >= self.policy.threshold;
            let overdue = self
                .policy
                .fallback_after
                .is_some_and(|wait| now.saturating_duration_since(block.mounted_at) >= wait);
            if qualifies || overdue {
                if !qualifies {
                    tracing::debug!(block = id.0, "reveal forced after fallback wait");
                }
                block.revealed = true;
                fired.push(id);
            }
        }
        fired
    }

    #[must_use]
    /// Whether a block has been revealed. Unknown blocks are not.
    pub fn is_revealed(&self, id: BlockId) -> bool {
        self.blocks.get(&id).is_some_and(|b| b.revealed)
    }

    #[must_use]
    /// Number of mounted blocks still hidden.
    pub fn pending(&self) -> usize {
        self.blocks.values().filter(|b| !b.revealed).count()
    }
}

#[cfg(test)]
#[path = "tests/reveal.rs"]
mod tests;
