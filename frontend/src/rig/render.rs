//! Flattens the robot and the decoration into 2D draw commands.
//!
//! A pinhole camera sits on the +z axis looking at the origin, matching the
//! 75 degree field of view the page was designed around. Nothing here touches
//! the DOM; `canvas.rs` paints the resulting list.

use std::f32::consts::TAU;

use glam::{EulerRot, Quat, Vec3};

use crate::rig::ambient::{AmbientFrame, Placement, ShapeKind};
use crate::rig::part::{Part, PartId, Scene, Shape};

const CAMERA_DISTANCE: f32 = 30.0;
const FIELD_OF_VIEW: f32 = 75.0;
const NEAR: f32 = 0.1;

const PARTICLE_COLOR: u32 = 0x00ffff;
const TORUS_SEGMENTS: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f32,
    pub y: f32,
    /// Pixels per world unit at this depth.
    pub scale: f32,
    pub depth: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    width: f32,
    height: f32,
    focal: f32,
}

impl Camera {
    pub fn new(width: f32, height: f32) -> Self {
        let half_fov = (FIELD_OF_VIEW.to_radians() / 2.0).tan();
        Self {
            width,
            height,
            focal: (height / 2.0) / half_fov,
        }
    }

    /// `None` for points at or behind the near plane.
    pub fn project(&self, p: Vec3) -> Option<Projected> {
        let depth = CAMERA_DISTANCE - p.z;
        if depth <= NEAR {
            return None;
        }
        let scale = self.focal / depth;
        Some(Projected {
            x: self.width / 2.0 + p.x * scale,
            y: self.height / 2.0 - p.y * scale,
            scale,
            depth,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Dot {
        x: f32,
        y: f32,
        size: f32,
        color: u32,
        alpha: f32,
    },
    /// Thick line with round caps.
    Segment {
        from: (f32, f32),
        to: (f32, f32),
        width: f32,
        color: u32,
    },
    Ellipse {
        x: f32,
        y: f32,
        rx: f32,
        ry: f32,
        color: u32,
        alpha: f32,
        /// Emissive colour and intensity.
        glow: Option<(u32, f32)>,
    },
    Polygon {
        points: Vec<(f32, f32)>,
        color: u32,
        alpha: f32,
        glow: Option<(u32, f32)>,
    },
    Polyline {
        points: Vec<(f32, f32)>,
        closed: bool,
        width: f32,
        color: u32,
        alpha: f32,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub commands: Vec<DrawCmd>,
}

fn euler(rotation: Vec3) -> Quat {
    Quat::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z)
}

fn point(p: &Projected) -> (f32, f32) {
    (p.x, p.y)
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Tori, particles and floating shapes, back to front.
    pub fn push_ambient(&mut self, camera: &Camera, particles: &[Vec3], frame: &AmbientFrame) {
        for torus in &frame.tori {
            let spec = torus.spec;
            for radius in [spec.major - spec.minor, spec.major + spec.minor] {
                let points = ring(camera, &torus.placement, radius);
                if points.len() > 2 {
                    self.commands.push(DrawCmd::Polyline {
                        points,
                        closed: true,
                        width: 1.0,
                        color: torus.color,
                        alpha: spec.opacity,
                    });
                }
            }
        }

        let spin = euler(frame.field_rotation);
        for p in particles {
            if let Some(at) = camera.project(spin * *p) {
                self.commands.push(DrawCmd::Dot {
                    x: at.x,
                    y: at.y,
                    size: (0.1 * at.scale).max(1.0),
                    color: PARTICLE_COLOR,
                    alpha: 0.6,
                });
            }
        }

        for (shape, placement) in &frame.shapes {
            let sides = shape.kind.outline_sides();
            let outline = match shape.kind {
                ShapeKind::Torus => {
                    let inner = ring(camera, placement, 0.6);
                    self.push_wire(inner, shape.color);
                    ring(camera, placement, 1.4)
                }
                ShapeKind::TorusKnot => knot(camera, placement),
                _ => ring_sides(camera, placement, 1.0, sides),
            };
            if sides > 0 {
                // Spokes to the apex give the flat outline some depth.
                let apex = placement.position + euler(placement.rotation) * Vec3::Z;
                if let Some(apex) = camera.project(apex) {
                    for &corner in &outline {
                        self.push_wire(vec![corner, point(&apex)], shape.color);
                    }
                }
            }
            self.push_wire(outline, shape.color);
        }
    }

    fn push_wire(&mut self, points: Vec<(f32, f32)>, color: u32) {
        if points.len() < 2 {
            return;
        }
        let closed = points.len() > 2;
        self.commands.push(DrawCmd::Polyline {
            points,
            closed,
            width: 1.0,
            color,
            alpha: 0.4,
        });
    }

    /// Robot parts sorted far to near.
    pub fn push_figure(&mut self, camera: &Camera, scene: &Scene) {
        let Some(root) = scene.part(PartId::Root) else {
            return;
        };
        let root_pos = root.position;
        let root_rot = euler(root.rotation);
        let to_world = |part: &Part, local: Vec3| {
            root_pos + root_rot * (part.position + euler(part.rotation) * (local * part.scale))
        };

        let mut ordered: Vec<(f32, &Part)> = scene
            .parts()
            .filter(|p| p.id != PartId::Root)
            .map(|p| (to_world(p, Vec3::ZERO).z, p))
            .collect();
        ordered.sort_by(|a, b| a.0.total_cmp(&b.0));

        for (_, part) in ordered {
            let glow = match (part.material.emissive, part.glow) {
                (Some(color), Some(intensity)) => Some((color, intensity)),
                _ => None,
            };
            let project = |local: Vec3| camera.project(to_world(part, local));

            match part.shape {
                Shape::Group => {}
                Shape::Cuboid { width, height, depth } => {
                    let (w, h, d) = (width / 2.0, height / 2.0, depth / 2.0);
                    let corners = [(-w, h), (w, h), (w, -h), (-w, -h)]
                        .iter()
                        .filter_map(|&(x, y)| project(Vec3::new(x, y, d)))
                        .map(|p| point(&p))
                        .collect::<Vec<_>>();
                    if corners.len() == 4 {
                        self.commands.push(DrawCmd::Polygon {
                            points: corners,
                            color: part.material.color,
                            alpha: part.material.opacity,
                            glow,
                        });
                    }
                }
                Shape::Plane { width, height } => {
                    let (w, h) = (width / 2.0, height / 2.0);
                    let corners = [(-w, h), (w, h), (w, -h), (-w, -h)]
                        .iter()
                        .filter_map(|&(x, y)| project(Vec3::new(x, y, 0.0)))
                        .map(|p| point(&p))
                        .collect::<Vec<_>>();
                    if corners.len() == 4 {
                        self.commands.push(DrawCmd::Polygon {
                            points: corners,
                            color: part.material.color,
                            alpha: part.material.opacity,
                            glow,
                        });
                    }
                }
                Shape::Cylinder { top, bottom, height } => {
                    let (Some(a), Some(b)) = (
                        project(Vec3::new(0.0, height / 2.0, 0.0)),
                        project(Vec3::new(0.0, -height / 2.0, 0.0)),
                    ) else {
                        continue;
                    };
                    let scale = (a.scale + b.scale) / 2.0;
                    self.commands.push(DrawCmd::Segment {
                        from: point(&a),
                        to: point(&b),
                        width: (top + bottom) * scale * part.scale.x,
                        color: part.material.color,
                    });
                }
                Shape::Sphere { radius } | Shape::Disc { radius } => {
                    let Some(c) = project(Vec3::ZERO) else {
                        continue;
                    };
                    self.commands.push(DrawCmd::Ellipse {
                        x: c.x,
                        y: c.y,
                        rx: radius * c.scale * part.scale.x,
                        ry: radius * c.scale * part.scale.y,
                        color: part.material.color,
                        alpha: part.material.opacity,
                        glow,
                    });
                }
                Shape::Ring { inner, outer } => {
                    // Open arc so the spin reads on screen.
                    let mid = (inner + outer) / 2.0;
                    let points = (0..=40)
                        .filter_map(|i| {
                            let a = i as f32 / 40.0 * TAU * 0.85;
                            project(Vec3::new(a.cos() * mid, a.sin() * mid, 0.0))
                        })
                        .map(|p| point(&p))
                        .collect::<Vec<_>>();
                    let width = camera
                        .project(to_world(part, Vec3::ZERO))
                        .map(|c| (outer - inner) * c.scale)
                        .unwrap_or(1.0);
                    self.commands.push(DrawCmd::Polyline {
                        points,
                        closed: false,
                        width,
                        color: part.material.color,
                        alpha: part.material.opacity,
                    });
                }
            }
        }
    }
}

fn ring(camera: &Camera, placement: &Placement, radius: f32) -> Vec<(f32, f32)> {
    ring_sides(camera, placement, radius, TORUS_SEGMENTS)
}

fn ring_sides(camera: &Camera, placement: &Placement, radius: f32, sides: usize) -> Vec<(f32, f32)> {
    let rot = euler(placement.rotation);
    (0..sides)
        .filter_map(|i| {
            let a = i as f32 / sides as f32 * TAU;
            let local = Vec3::new(a.cos(), a.sin(), 0.0) * radius * placement.scale;
            camera.project(placement.position + rot * local)
        })
        .map(|p| point(&p))
        .collect()
}

/// (2, 3) torus knot.
fn knot(camera: &Camera, placement: &Placement) -> Vec<(f32, f32)> {
    let rot = euler(placement.rotation);
    (0..96)
        .filter_map(|i| {
            let phi = i as f32 / 96.0 * TAU;
            let r = 0.8 + 0.3 * (3.0 * phi).cos();
            let local = Vec3::new(r * (2.0 * phi).cos(), r * (2.0 * phi).sin(), 0.3 * (3.0 * phi).sin());
            camera.project(placement.position + rot * (local * placement.scale))
        })
        .map(|p| point(&p))
        .collect()
}
