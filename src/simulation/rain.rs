use super::{phase::Dimensions, MONTHLY_INTENSITY};
use rand::{rngs::StdRng, Rng, SeedableRng};

pub const PARTICLES_AT_FULL_INTENSITY: f64 = 1000.;
pub const SPAWN_MARGIN: f32 = 10.;
pub const GROUND_Y: f32 = -2.;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: [f32; 3],
    pub velocity: [f32; 3],
}

/// Falling rain over the roof footprint. Purely visual.
#[derive(Debug, Clone)]
pub struct RainField<R: Rng> {
    pub intensity: f64,
    pub particles: Vec<Particle>,
    area: Dimensions,
    rng: R,
}

impl RainField<StdRng> {
    pub fn seeded(seed: u64, base_intensity: f64, month: u8, area: Dimensions) -> Self {
        Self::new(StdRng::seed_from_u64(seed), base_intensity, month, area)
    }
}

impl<R: Rng> RainField<R> {
    pub fn new(mut rng: R, base_intensity: f64, month: u8, area: Dimensions) -> Self {
        let monthly = month.checked_sub(1).and_then(|i| MONTHLY_INTENSITY.get(i as usize)).copied().unwrap_or(0.);
        let intensity = monthly * base_intensity;
        let count = (intensity * PARTICLES_AT_FULL_INTENSITY).floor().max(0.) as usize;
        let particles = (0..count)
            .map(|_| Particle {
                position: spawn_position(&mut rng, area),
                velocity: [
                    (rng.random::<f32>() - 0.5) * 0.1,
                    -rng.random::<f32>() * 0.3 - 0.2,
                    (rng.random::<f32>() - 0.5) * 0.1,
                ],
            })
            .collect();
        Self { intensity, particles, area, rng }
    }

    /// One frame: move every drop, respawning the ones that hit the ground.
    pub fn step(&mut self) {
        for particle in self.particles.iter_mut() {
            for axis in 0..3 {
                particle.position[axis] += particle.velocity[axis];
            }
            if particle.position[1] < GROUND_Y {
                particle.position = spawn_position(&mut self.rng, self.area);
            }
        }
    }

    pub fn opacity(&self) -> f64 {
        self.intensity * 0.8
    }

    pub fn size(&self) -> f64 {
        self.intensity * 0.1 + 0.05
    }
}

fn spawn_position<R: Rng>(rng: &mut R, area: Dimensions) -> [f32; 3] {
    [
        (rng.random::<f32>() - 0.5) * (area.length as f32 + SPAWN_MARGIN),
        rng.random::<f32>() * 15. + 5.,
        (rng.random::<f32>() - 0.5) * (area.width as f32 + SPAWN_MARGIN),
    ]
}
