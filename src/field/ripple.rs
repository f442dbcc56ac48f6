//! Click-seeded ripples: expanding rings that fade and expire on a schedule.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Duration;

use glam::Vec2;

use crate::params::RippleParams;

/// Identity of a ripple, unique within one `RippleSet`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RippleId(u64);

/// A transient circular disturbance in grid-local plane space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub id: RippleId,
    /// Center on the local X/Z plane
    pub origin: Vec2,
    /// Field clock time at creation
    pub created_at: Duration,
    pub strength: f32,
}

impl Ripple {
    /// Seconds since creation (zero before `created_at`)
    pub fn elapsed_s(&self, now: Duration) -> f32 {
        now.saturating_sub(self.created_at).as_secs_f32()
    }

    /// Radius of the leading edge of the ring
    pub fn radius_at(&self, now: Duration, params: &RippleParams) -> f32 {
        self.elapsed_s(now) * params.propagation_speed
    }

    /// Height added at local point (x, z)
    ///
    /// Non-zero only inside the band `radius - band_width < d < radius`.
    pub fn contribution(&self, x: f32, z: f32, now: Duration, params: &RippleParams) -> f32 {
        let distance = Vec2::new(x, z).distance(self.origin);
        let elapsed = self.elapsed_s(now);
        let radius = elapsed * params.propagation_speed;

        if distance >= radius || distance <= radius - params.band_width {
            return 0.0;
        }

        let fade_out = (1.0 - elapsed / params.lifetime.as_secs_f32()).max(0.0);
        let offset = distance - radius;
        let ring_intensity = (-(offset * offset) / params.gaussian_width).exp();
        let oscillation =
            (distance * params.ring_wavenumber - elapsed * params.ring_angular_speed).sin();

        self.strength * ring_intensity * fade_out * oscillation
    }
}

/// Active ripples plus their pending expiries
///
/// Expiry is keyed by `RippleId`, so removing one ripple never disturbs
/// another that happens to share its slot or timestamp.
#[derive(Debug, Default)]
pub struct RippleSet {
    active: Vec<Ripple>,
    expiries: BinaryHeap<Reverse<(Duration, RippleId)>>,
    next_id: u64,
}

impl RippleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a ripple and schedule its removal at `now + lifetime`
    pub fn spawn(
        &mut self,
        origin: Vec2,
        now: Duration,
        strength: f32,
        lifetime: Duration,
    ) -> RippleId {
        let id = RippleId(self.next_id);
        self.next_id += 1;

        self.active.push(Ripple {
            id,
            origin,
            created_at: now,
            strength,
        });
        self.expiries.push(Reverse((now + lifetime, id)));

        id
    }

    /// Remove every ripple whose deadline is at or before `now`
    ///
    /// Returns the number of ripples removed.
    pub fn expire_due(&mut self, now: Duration) -> usize {
        let mut removed = 0;

        while let Some(Reverse((deadline, id))) = self.expiries.peek().copied() {
            if deadline > now {
                break;
            }
            self.expiries.pop();

            if let Some(pos) = self.active.iter().position(|r| r.id == id) {
                self.active.remove(pos);
                removed += 1;
                log::debug!("Ripple {:?} expired", id);
            }
        }

        removed
    }

    /// Earliest pending expiry, if any
    pub fn next_deadline(&self) -> Option<Duration> {
        self.expiries.peek().map(|Reverse((deadline, _))| *deadline)
    }

    /// Drop all ripples and cancel their pending expiries
    pub fn clear(&mut self) {
        self.active.clear();
        self.expiries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ripple> {
        self.active.iter()
    }

    pub fn get(&self, id: RippleId) -> Option<&Ripple> {
        self.active.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: RippleId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
