//! Background decoration: particle field, floating wireframe shapes and two
//! morphing tori. Independent of the robot and of scroll progress; every
//! transform is a closed-form function of elapsed time.

use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::AmbientConfig;

const CYAN: u32 = 0x00ffff;
const MAGENTA: u32 = 0xff00ff;

/// Particle field spin per frame, about x and y.
const FIELD_SPIN: Vec3 = Vec3::new(0.0005, 0.001, 0.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Octahedron,
    Tetrahedron,
    Icosahedron,
    Torus,
    TorusKnot,
}

impl ShapeKind {
    const ALL: [ShapeKind; 5] = [
        ShapeKind::Octahedron,
        ShapeKind::Tetrahedron,
        ShapeKind::Icosahedron,
        ShapeKind::Torus,
        ShapeKind::TorusKnot,
    ];

    /// Sides of the outline drawn for the flat rendering; 0 means round.
    pub fn outline_sides(self) -> usize {
        match self {
            ShapeKind::Octahedron => 4,
            ShapeKind::Tetrahedron => 3,
            ShapeKind::Icosahedron => 6,
            ShapeKind::Torus | ShapeKind::TorusKnot => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingShape {
    pub kind: ShapeKind,
    pub color: u32,
    pub base: Vec3,
    /// Rotation per frame.
    pub spin: Vec3,
    /// Vertical drift per frame at the peak of the bob.
    pub bob_speed: f32,
    pub bob_phase: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorusSpec {
    pub center: Vec3,
    pub major: f32,
    pub minor: f32,
    /// Rotation per frame.
    pub spin: Vec3,
    pub morph_rate: f32,
    pub morph_phase: f32,
    pub morph_depth: f32,
    pub hue_rate: f32,
    pub hue_offset: f32,
    pub saturation: f32,
    pub opacity: f32,
}

const TORI: [TorusSpec; 2] = [
    TorusSpec {
        center: Vec3::new(20.0, 0.0, -20.0),
        major: 8.0,
        minor: 2.0,
        spin: Vec3::new(0.005, 0.008, 0.003),
        morph_rate: 0.5,
        morph_phase: 0.0,
        morph_depth: 0.1,
        hue_rate: 0.05,
        hue_offset: 0.0,
        saturation: 0.7,
        opacity: 0.3,
    },
    TorusSpec {
        center: Vec3::new(-20.0, 10.0, -25.0),
        major: 6.0,
        minor: 1.5,
        spin: Vec3::new(-0.003, -0.006, -0.004),
        morph_rate: 0.3,
        morph_phase: 2.0,
        morph_depth: 0.15,
        hue_rate: 0.03,
        hue_offset: 0.5,
        saturation: 0.8,
        opacity: 0.25,
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorusFrame {
    pub spec: TorusSpec,
    pub placement: Placement,
    pub color: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AmbientFrame {
    pub field_rotation: Vec3,
    pub shapes: Vec<(FloatingShape, Placement)>,
    pub tori: Vec<TorusFrame>,
}

/// Seeded layout of every decorative element.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoration {
    particles: Vec<Vec3>,
    shapes: Vec<FloatingShape>,
    time_step: f32,
}

impl Decoration {
    pub fn new(config: &AmbientConfig, time_step: f32) -> Self {
        let mut rng = SmallRng::seed_from_u64(config.seed);

        let particles = (0..config.particles)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-50.0..50.0),
                    rng.gen_range(-50.0..50.0),
                    rng.gen_range(-50.0..50.0),
                )
            })
            .collect();

        let shapes = (0..config.shapes)
            .map(|_| FloatingShape {
                kind: ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())],
                color: if rng.gen::<bool>() { CYAN } else { MAGENTA },
                base: Vec3::new(
                    rng.gen_range(-30.0..30.0),
                    rng.gen_range(-30.0..30.0),
                    rng.gen_range(-20.0..20.0) - 10.0,
                ),
                spin: Vec3::new(
                    rng.gen_range(-0.01..0.01),
                    rng.gen_range(-0.01..0.01),
                    rng.gen_range(-0.01..0.01),
                ),
                bob_speed: rng.gen_range(0.01..0.03),
                bob_phase: rng.gen_range(0.0..std::f32::consts::TAU),
            })
            .collect();

        Self {
            particles,
            shapes,
            time_step,
        }
    }

    pub fn particles(&self) -> &[Vec3] {
        &self.particles
    }

    pub fn shapes(&self) -> &[FloatingShape] {
        &self.shapes
    }

    fn frames(&self, t: f32) -> f32 {
        t / self.time_step
    }

    pub fn field_rotation(&self, t: f32) -> Vec3 {
        FIELD_SPIN * self.frames(t)
    }

    pub fn shape_at(&self, shape: &FloatingShape, t: f32) -> Placement {
        // Integral of sin(t + phase) * speed accumulated once per frame.
        let drift = shape.bob_speed / self.time_step
            * (shape.bob_phase.cos() - (t + shape.bob_phase).cos());
        Placement {
            position: shape.base + Vec3::Y * drift,
            rotation: shape.spin * self.frames(t),
            scale: 1.0,
        }
    }

    pub fn torus_at(&self, spec: &TorusSpec, t: f32) -> TorusFrame {
        let hue = (t * spec.hue_rate + spec.hue_offset).rem_euclid(1.0);
        TorusFrame {
            spec: *spec,
            placement: Placement {
                position: spec.center,
                rotation: spec.spin * self.frames(t),
                scale: 1.0 + (t * spec.morph_rate + spec.morph_phase).sin() * spec.morph_depth,
            },
            color: hsl_to_rgb(hue, spec.saturation, 0.5),
        }
    }

    pub fn frame(&self, t: f32) -> AmbientFrame {
        AmbientFrame {
            field_rotation: self.field_rotation(t),
            shapes: self
                .shapes
                .iter()
                .map(|s| (*s, self.shape_at(s, t)))
                .collect(),
            tori: TORI.iter().map(|spec| self.torus_at(spec, t)).collect(),
        }
    }
}

/// HSL in [0, 1] to packed `0xRRGGBB`.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> u32 {
    let h = h.rem_euclid(1.0);
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let channel = |t: f32| {
        let t = t.rem_euclid(1.0);
        let c = if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * 6.0 * (2.0 / 3.0 - t)
        } else {
            p
        };
        (c.clamp(0.0, 1.0) * 255.0).round() as u32
    };
    (channel(h + 1.0 / 3.0) << 16) | (channel(h) << 8) | channel(h - 1.0 / 3.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoration() -> Decoration {
        Decoration::new(&AmbientConfig::default(), 0.01)
    }

    #[test]
    fn layout_is_deterministic_for_a_seed() {
        assert_eq!(decoration(), decoration());
        let other = Decoration::new(
            &AmbientConfig {
                seed: 7,
                ..AmbientConfig::default()
            },
            0.01,
        );
        assert_ne!(decoration().particles(), other.particles());
    }

    #[test]
    fn layout_respects_counts_and_bounds() {
        let d = decoration();
        assert_eq!(d.particles().len(), 1000);
        assert_eq!(d.shapes().len(), 20);
        for p in d.particles() {
            assert!(p.abs().max_element() <= 50.0);
        }
        for s in d.shapes() {
            assert!(s.base.x.abs() <= 30.0 && s.base.y.abs() <= 30.0);
            assert!(s.base.z >= -30.0 && s.base.z <= 10.0);
            assert!(s.spin.abs().max_element() <= 0.01);
            assert!((0.01..0.03).contains(&s.bob_speed));
            assert!(s.color == CYAN || s.color == MAGENTA);
        }
    }

    #[test]
    fn field_spins_at_fixed_rate() {
        let d = decoration();
        assert_eq!(d.field_rotation(0.0), Vec3::ZERO);
        let r = d.field_rotation(1.0);
        assert!((r.x - 0.05).abs() < 1e-6);
        assert!((r.y - 0.1).abs() < 1e-6);
        assert_eq!(r.z, 0.0);
    }

    #[test]
    fn shapes_start_at_their_base_and_bob() {
        let d = decoration();
        let shape = d.shapes()[0];
        assert!((d.shape_at(&shape, 0.0).position - shape.base).length() < 1e-5);

        let amplitude = 2.0 * shape.bob_speed / 0.01;
        for i in 0..200 {
            let at = d.shape_at(&shape, i as f32 * 0.1);
            assert!((at.position.y - shape.base.y).abs() <= amplitude + 1e-4);
            assert_eq!(at.position.x, shape.base.x);
        }
    }

    #[test]
    fn tori_morph_within_bounds_and_cycle_colour() {
        let d = decoration();
        for i in 0..1000 {
            let frame = d.frame(i as f32 * 0.37);
            assert_eq!(frame.tori.len(), 2);
            assert!((0.9..=1.1).contains(&frame.tori[0].placement.scale));
            assert!((0.85..=1.15).contains(&frame.tori[1].placement.scale));
        }
        let early = d.frame(0.0).tori[0].color;
        let later = d.frame(5.0).tori[0].color;
        assert_ne!(early, later);
    }

    #[test]
    fn hsl_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), 0xff0000);
        assert_eq!(hsl_to_rgb(1.0 / 3.0, 1.0, 0.5), 0x00ff00);
        assert_eq!(hsl_to_rgb(2.0 / 3.0, 1.0, 0.5), 0x0000ff);
        assert_eq!(hsl_to_rgb(0.5, 0.0, 0.5), 0x808080);
        assert_eq!(hsl_to_rgb(1.0, 1.0, 0.5), hsl_to_rgb(0.0, 1.0, 0.5));
    }
}
