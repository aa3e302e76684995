use rand::Rng;

pub const PARTICLE_COUNT: usize = 30;

const MAX_SPEED: f64 = 0.4;
const MIN_RADIUS: f64 = 0.5;
const RADIUS_SPREAD: f64 = 1.5;
const MAX_ALPHA: f64 = 0.2;
// indigo, matches the accent gradient
const HUE: (u8, u8, u8) = (99, 102, 241);

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    pub radius: f64,
    /// CSS fill colour, built once at spawn.
    pub color: String,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Self {
        let alpha = rng.random_range(0.0..MAX_ALPHA);
        Self {
            x: random_below(rng, width),
            y: random_below(rng, height),
            dx: rng.random_range(-MAX_SPEED..MAX_SPEED),
            dy: rng.random_range(-MAX_SPEED..MAX_SPEED),
            radius: MIN_RADIUS + rng.random_range(0.0..RADIUS_SPREAD),
            color: format!("rgba({}, {}, {}, {:.3})", HUE.0, HUE.1, HUE.2, alpha),
        }
    }
}

/// Fixed set of particles living on a `width` x `height` surface.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleField {
    pub width: f64,
    pub height: f64,
    pub particles: Vec<Particle>,
}

impl ParticleField {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, count: usize, width: f64, height: f64) -> Self {
        let particles = (0..count)
            .map(|_| Particle::random(rng, width, height))
            .collect();
        Self {
            width,
            height,
            particles,
        }
    }

    /// Adopts new surface bounds. Particles outside them are wrapped back in
    /// right away rather than on the next step.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        for particle in &mut self.particles {
            particle.x = wrap(particle.x, width);
            particle.y = wrap(particle.y, height);
        }
    }
}

/// Advances every particle by its velocity, wrapping to the opposite edge.
pub fn step(field: &mut ParticleField) {
    let (width, height) = (field.width, field.height);
    for particle in &mut field.particles {
        particle.x = wrap(particle.x + particle.dx, width);
        particle.y = wrap(particle.y + particle.dy, height);
    }
}

/// Maps `value` into `[0, extent)`. A degenerate surface pins everything to 0.
pub fn wrap(value: f64, extent: f64) -> f64 {
    if !(extent > 0.0) || !value.is_finite() {
        return 0.0;
    }
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

fn random_below<R: Rng + ?Sized>(rng: &mut R, extent: f64) -> f64 {
    if extent > 0.0 {
        rng.random_range(0.0..extent)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn in_bounds(field: &ParticleField) -> bool {
        field.particles.iter().all(|p| {
            p.x >= 0.0 && p.x < field.width && p.y >= 0.0 && p.y < field.height
        })
    }

    #[test]
    fn test_spawn_respects_ranges() {
        let mut rng = Pcg32::seed_from_u64(7);
        let field = ParticleField::spawn(&mut rng, PARTICLE_COUNT, 1440.0, 900.0);
        assert_eq!(field.particles.len(), PARTICLE_COUNT);
        assert!(in_bounds(&field));
        for p in &field.particles {
            assert!(p.dx >= -MAX_SPEED && p.dx < MAX_SPEED);
            assert!(p.dy >= -MAX_SPEED && p.dy < MAX_SPEED);
            assert!(p.radius >= MIN_RADIUS && p.radius < MIN_RADIUS + RADIUS_SPREAD);
            assert!(p.color.starts_with("rgba(99, 102, 241, 0."));
        }
    }

    #[test]
    fn test_positions_stay_in_bounds_over_many_steps() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut field = ParticleField::spawn(&mut rng, PARTICLE_COUNT, 375.0, 667.0);
        for _ in 0..20_000 {
            step(&mut field);
            assert!(in_bounds(&field));
        }
        assert_eq!(field.particles.len(), PARTICLE_COUNT);
    }

    #[test]
    fn test_fast_particles_wrap_to_opposite_edge() {
        let mut field = ParticleField {
            width: 100.0,
            height: 50.0,
            particles: vec![Particle {
                x: 99.9,
                y: 0.1,
                dx: 0.3,
                dy: -0.3,
                radius: 1.0,
                color: String::new(),
            }],
        };
        step(&mut field);
        let p = &field.particles[0];
        assert!((p.x - 0.2).abs() < 1e-9);
        assert!((p.y - 49.8).abs() < 1e-9);

        // larger than the surface itself
        field.particles[0].dx = 1234.5;
        field.particles[0].dy = -987.6;
        for _ in 0..100 {
            step(&mut field);
            assert!(in_bounds(&field));
        }
    }

    #[test]
    fn test_wrap_edges() {
        assert_eq!(wrap(0.0, 10.0), 0.0);
        assert_eq!(wrap(10.0, 10.0), 0.0);
        assert_eq!(wrap(-1e-20, 10.0), 0.0);
        assert!((wrap(-0.5, 10.0) - 9.5).abs() < 1e-12);
        assert_eq!(wrap(5.0, 0.0), 0.0);
        assert_eq!(wrap(f64::NAN, 10.0), 0.0);
    }

    #[test]
    fn test_resize_pulls_particles_inside_new_bounds() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut field = ParticleField::spawn(&mut rng, PARTICLE_COUNT, 1920.0, 1080.0);
        field.resize(320.0, 240.0);
        assert!(in_bounds(&field));
        step(&mut field);
        assert!(in_bounds(&field));
    }

    #[test]
    fn test_zero_sized_surface_does_not_panic() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut field = ParticleField::spawn(&mut rng, PARTICLE_COUNT, 0.0, 0.0);
        step(&mut field);
        assert!(field.particles.iter().all(|p| p.x == 0.0 && p.y == 0.0));
    }
}
