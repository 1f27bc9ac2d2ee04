//! Rigid parts of the robot and the scene that owns them.

use std::collections::BTreeMap;

use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PartId {
    /// The figure group every other part hangs off.
    Root,
    Head,
    FacePanel,
    LeftEye,
    RightEye,
    LeftPupil,
    RightPupil,
    Antenna,
    AntennaTip,
    Neck,
    Body,
    Screen,
    ScreenRing,
    LeftShoulder,
    RightShoulder,
    LeftUpperArm,
    RightUpperArm,
    LeftElbow,
    RightElbow,
    LeftLowerArm,
    RightLowerArm,
    LeftHand,
    RightHand,
    Waist,
    LeftUpperLeg,
    RightUpperLeg,
    LeftKnee,
    RightKnee,
    LeftLowerLeg,
    RightLowerLeg,
    LeftFoot,
    RightFoot,
}

impl PartId {
    /// Every part of the figure below the root, in construction order.
    pub const FIGURE: [PartId; 31] = [
        PartId::Head,
        PartId::FacePanel,
        PartId::LeftEye,
        PartId::RightEye,
        PartId::LeftPupil,
        PartId::RightPupil,
        PartId::Antenna,
        PartId::AntennaTip,
        PartId::Neck,
        PartId::Body,
        PartId::Screen,
        PartId::ScreenRing,
        PartId::LeftShoulder,
        PartId::RightShoulder,
        PartId::LeftUpperArm,
        PartId::RightUpperArm,
        PartId::LeftElbow,
        PartId::RightElbow,
        PartId::LeftLowerArm,
        PartId::RightLowerArm,
        PartId::LeftHand,
        PartId::RightHand,
        PartId::Waist,
        PartId::LeftUpperLeg,
        PartId::RightUpperLeg,
        PartId::LeftKnee,
        PartId::RightKnee,
        PartId::LeftLowerLeg,
        PartId::RightLowerLeg,
        PartId::LeftFoot,
        PartId::RightFoot,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PartId::Root => "root",
            PartId::Head => "head",
            PartId::FacePanel => "facePanel",
            PartId::LeftEye => "leftEye",
            PartId::RightEye => "rightEye",
            PartId::LeftPupil => "leftPupil",
            PartId::RightPupil => "rightPupil",
            PartId::Antenna => "antenna",
            PartId::AntennaTip => "antennaTop",
            PartId::Neck => "neck",
            PartId::Body => "body",
            PartId::Screen => "screen",
            PartId::ScreenRing => "ring",
            PartId::LeftShoulder => "leftShoulder",
            PartId::RightShoulder => "rightShoulder",
            PartId::LeftUpperArm => "leftUpperArm",
            PartId::RightUpperArm => "rightUpperArm",
            PartId::LeftElbow => "leftElbow",
            PartId::RightElbow => "rightElbow",
            PartId::LeftLowerArm => "leftLowerArm",
            PartId::RightLowerArm => "rightLowerArm",
            PartId::LeftHand => "leftHand",
            PartId::RightHand => "rightHand",
            PartId::Waist => "waist",
            PartId::LeftUpperLeg => "leftUpperLeg",
            PartId::RightUpperLeg => "rightUpperLeg",
            PartId::LeftKnee => "leftKnee",
            PartId::RightKnee => "rightKnee",
            PartId::LeftLowerLeg => "leftLowerLeg",
            PartId::RightLowerLeg => "rightLowerLeg",
            PartId::LeftFoot => "leftFoot",
            PartId::RightFoot => "rightFoot",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Group,
    Cuboid { width: f32, height: f32, depth: f32 },
    Cylinder { top: f32, bottom: f32, height: f32 },
    Sphere { radius: f32 },
    Plane { width: f32, height: f32 },
    Disc { radius: f32 },
    Ring { inner: f32, outer: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: u32,
    /// Emissive colour, present only on parts that glow.
    pub emissive: Option<u32>,
    pub opacity: f32,
}

impl Material {
    const fn solid(color: u32) -> Self {
        Self { color, emissive: None, opacity: 1.0 }
    }

    const fn glowing(color: u32, emissive: u32) -> Self {
        Self { color, emissive: Some(emissive), opacity: 1.0 }
    }
}

/// Scalar attributes the animation driver can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Attr {
    PosX,
    PosY,
    PosZ,
    RotX,
    RotY,
    RotZ,
    ScaleY,
    Glow,
}

/// Entry of the initial pose table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rest {
    pub shape: Shape,
    pub material: Material,
    pub position: Vec3,
    pub rotation: Vec3,
    pub glow: Option<f32>,
}

const BLUE: u32 = 0x3b82f6;
const DARK: u32 = 0x1e293b;
const CYAN: u32 = 0x00ffff;

/// Rest pose of a figure part, relative to the root.
pub fn rest(id: PartId) -> Rest {
    let at = |x: f32, y: f32, z: f32| Vec3::new(x, y, z);
    let (shape, material, position, glow) = match id {
        PartId::Root => (Shape::Group, Material::solid(0), Vec3::ZERO, None),
        PartId::Head => (
            Shape::Cuboid { width: 2.5, height: 2.2, depth: 2.2 },
            Material::glowing(BLUE, 0x1e40af),
            at(0.0, 4.0, 0.0),
            Some(0.1),
        ),
        PartId::FacePanel => (
            Shape::Plane { width: 2.0, height: 1.5 },
            Material::glowing(0x000000, CYAN),
            at(0.0, 4.0, 1.11),
            Some(0.3),
        ),
        PartId::LeftEye | PartId::RightEye => (
            Shape::Sphere { radius: 0.25 },
            Material::glowing(CYAN, CYAN),
            at(side(id) * 0.5, 4.2, 1.2),
            Some(0.9),
        ),
        PartId::LeftPupil | PartId::RightPupil => (
            Shape::Sphere { radius: 0.12 },
            Material::solid(0x000000),
            at(side(id) * 0.5, 4.2, 1.35),
            None,
        ),
        PartId::Antenna => (
            Shape::Cylinder { top: 0.08, bottom: 0.08, height: 1.2 },
            Material::solid(0x6366f1),
            at(0.0, 5.3, 0.0),
            None,
        ),
        PartId::AntennaTip => (
            Shape::Sphere { radius: 0.25 },
            Material::glowing(0xff00ff, 0xff00ff),
            at(0.0, 5.9, 0.0),
            Some(0.8),
        ),
        PartId::Neck => (
            Shape::Cylinder { top: 0.5, bottom: 0.6, height: 0.6 },
            Material::solid(DARK),
            at(0.0, 2.8, 0.0),
            None,
        ),
        PartId::Body => (
            Shape::Cuboid { width: 3.0, height: 3.5, depth: 2.0 },
            Material::solid(BLUE),
            at(0.0, 0.5, 0.0),
            None,
        ),
        PartId::Screen => (
            Shape::Disc { radius: 0.8 },
            Material::glowing(CYAN, CYAN),
            at(0.0, 0.8, 1.01),
            Some(0.7),
        ),
        PartId::ScreenRing => (
            Shape::Ring { inner: 0.8, outer: 0.95 },
            Material { color: CYAN, emissive: None, opacity: 0.6 },
            at(0.0, 0.8, 1.02),
            None,
        ),
        PartId::LeftShoulder | PartId::RightShoulder => (
            Shape::Sphere { radius: 0.5 },
            Material::solid(DARK),
            at(side(id) * 1.8, 1.5, 0.0),
            None,
        ),
        PartId::LeftUpperArm | PartId::RightUpperArm => (
            Shape::Cylinder { top: 0.35, bottom: 0.35, height: 2.0 },
            Material::solid(BLUE),
            at(side(id) * 1.8, 0.5, 0.0),
            None,
        ),
        PartId::LeftElbow | PartId::RightElbow => (
            Shape::Sphere { radius: 0.35 },
            Material::solid(DARK),
            at(side(id) * 1.8, -0.5, 0.0),
            None,
        ),
        PartId::LeftLowerArm | PartId::RightLowerArm => (
            Shape::Cylinder { top: 0.3, bottom: 0.3, height: 1.5 },
            Material::solid(BLUE),
            at(side(id) * 1.8, -1.3, 0.0),
            None,
        ),
        PartId::LeftHand | PartId::RightHand => (
            Shape::Sphere { radius: 0.45 },
            Material::solid(DARK),
            at(side(id) * 1.8, -2.1, 0.0),
            None,
        ),
        PartId::Waist => (
            Shape::Cylinder { top: 0.8, bottom: 1.0, height: 0.5 },
            Material::solid(DARK),
            at(0.0, -1.25, 0.0),
            None,
        ),
        PartId::LeftUpperLeg | PartId::RightUpperLeg => (
            Shape::Cylinder { top: 0.45, bottom: 0.45, height: 2.5 },
            Material::solid(BLUE),
            at(side(id) * 0.7, -2.75, 0.0),
            None,
        ),
        PartId::LeftKnee | PartId::RightKnee => (
            Shape::Sphere { radius: 0.4 },
            Material::solid(DARK),
            at(side(id) * 0.7, -4.0, 0.0),
            None,
        ),
        PartId::LeftLowerLeg | PartId::RightLowerLeg => (
            Shape::Cylinder { top: 0.4, bottom: 0.35, height: 2.0 },
            Material::solid(BLUE),
            at(side(id) * 0.7, -5.0, 0.0),
            None,
        ),
        PartId::LeftFoot | PartId::RightFoot => (
            Shape::Cuboid { width: 0.8, height: 0.4, depth: 1.2 },
            Material::solid(DARK),
            at(side(id) * 0.7, -6.2, 0.2),
            None,
        ),
    };

    // Upper arms hang slightly away from the torso.
    let rotation = match id {
        PartId::LeftUpperArm => Vec3::new(0.0, 0.0, 0.2),
        PartId::RightUpperArm => Vec3::new(0.0, 0.0, -0.2),
        _ => Vec3::ZERO,
    };

    Rest { shape, material, position, rotation, glow }
}

fn side(id: PartId) -> f32 {
    match id {
        PartId::LeftEye
        | PartId::LeftPupil
        | PartId::LeftShoulder
        | PartId::LeftUpperArm
        | PartId::LeftElbow
        | PartId::LeftLowerArm
        | PartId::LeftHand
        | PartId::LeftUpperLeg
        | PartId::LeftKnee
        | PartId::LeftLowerLeg
        | PartId::LeftFoot => -1.0,
        _ => 1.0,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub id: PartId,
    pub shape: Shape,
    pub material: Material,
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
    pub glow: Option<f32>,
}

impl Part {
    fn from_rest(id: PartId) -> Self {
        let r = rest(id);
        Self {
            id,
            shape: r.shape,
            material: r.material,
            position: r.position,
            rotation: r.rotation,
            scale: Vec3::ONE,
            glow: r.glow,
        }
    }

    pub fn get(&self, attr: Attr) -> Option<f32> {
        match attr {
            Attr::PosX => Some(self.position.x),
            Attr::PosY => Some(self.position.y),
            Attr::PosZ => Some(self.position.z),
            Attr::RotX => Some(self.rotation.x),
            Attr::RotY => Some(self.rotation.y),
            Attr::RotZ => Some(self.rotation.z),
            Attr::ScaleY => Some(self.scale.y),
            Attr::Glow => self.glow,
        }
    }

    /// Mutable handle to an attribute, `None` if the part has no such slot.
    pub fn slot(&mut self, attr: Attr) -> Option<&mut f32> {
        match attr {
            Attr::PosX => Some(&mut self.position.x),
            Attr::PosY => Some(&mut self.position.y),
            Attr::PosZ => Some(&mut self.position.z),
            Attr::RotX => Some(&mut self.rotation.x),
            Attr::RotY => Some(&mut self.rotation.y),
            Attr::RotZ => Some(&mut self.rotation.z),
            Attr::ScaleY => Some(&mut self.scale.y),
            Attr::Glow => self.glow.as_mut(),
        }
    }
}

/// Owns every part of the figure. Parts live exactly as long as the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    parts: BTreeMap<PartId, Part>,
}

impl Scene {
    /// Full robot with its root at `mount`.
    pub fn robot(mount: Vec3) -> Self {
        Self::with_parts(PartId::FIGURE, mount)
    }

    /// Scene holding the root plus the given parts only.
    pub fn with_parts(ids: impl IntoIterator<Item = PartId>, mount: Vec3) -> Self {
        let mut parts = BTreeMap::new();
        let mut root = Part::from_rest(PartId::Root);
        root.position = mount;
        parts.insert(PartId::Root, root);
        for id in ids {
            parts.insert(id, Part::from_rest(id));
        }
        Self { parts }
    }

    pub fn part(&self, id: PartId) -> Option<&Part> {
        self.parts.get(&id)
    }

    pub fn part_mut(&mut self, id: PartId) -> Option<&mut Part> {
        self.parts.get_mut(&id)
    }

    pub fn parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.values()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn robot_holds_root_and_every_figure_part() {
        let scene = Scene::robot(Vec3::new(-12.0, 0.0, 0.0));
        assert_eq!(scene.len(), PartId::FIGURE.len() + 1);
        assert_eq!(
            scene.part(PartId::Root).map(|p| p.position),
            Some(Vec3::new(-12.0, 0.0, 0.0))
        );
        for id in PartId::FIGURE {
            let part = scene.part(id).expect("part constructed");
            assert_eq!(part.position, rest(id).position, "{}", id.name());
            assert_eq!(part.scale, Vec3::ONE);
        }
    }

    #[test]
    fn limbs_are_mirrored() {
        let l = rest(PartId::LeftHand).position;
        let r = rest(PartId::RightHand).position;
        assert_eq!(l, Vec3::new(-1.8, -2.1, 0.0));
        assert_eq!(r, Vec3::new(1.8, -2.1, 0.0));
        assert_eq!(rest(PartId::LeftFoot).position.x, -0.7);
        assert_eq!(rest(PartId::RightFoot).position.z, 0.2);
        assert_eq!(rest(PartId::LeftUpperArm).rotation.z, 0.2);
        assert_eq!(rest(PartId::RightUpperArm).rotation.z, -0.2);
    }

    #[test]
    fn glow_slot_only_on_emissive_parts() {
        let mut scene = Scene::robot(Vec3::ZERO);
        let screen = scene.part_mut(PartId::Screen).unwrap();
        assert_eq!(screen.get(Attr::Glow), Some(0.7));
        *screen.slot(Attr::Glow).unwrap() = 0.2;
        assert_eq!(screen.glow, Some(0.2));

        let body = scene.part_mut(PartId::Body).unwrap();
        assert!(body.slot(Attr::Glow).is_none());
        assert!(body.get(Attr::Glow).is_none());
    }

    #[test]
    fn partial_scene_reports_missing_parts() {
        let scene = Scene::with_parts([PartId::Head, PartId::Body], Vec3::ZERO);
        assert_eq!(scene.len(), 3);
        assert!(scene.part(PartId::LeftEye).is_none());
    }
}
