//! Section poses. Pure functions of (section, elapsed time).

use glam::Vec3;

use crate::rig::part::{Attr, PartId};

/// Page regions, in scroll order. Each one drives its own pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Hero,
    Automations,
    LeadEngagement,
    Chatbots,
    Calling,
    Blockchain,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::Automations,
        Section::LeadEngagement,
        Section::Chatbots,
        Section::Calling,
        Section::Blockchain,
    ];

    /// Six equal buckets over [0, 1]. Recomputed every frame, no hysteresis.
    pub fn from_progress(progress: f32) -> Self {
        let p = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
        let index = ((p * Self::ALL.len() as f32) as usize).min(Self::ALL.len() - 1);
        Self::ALL[index]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn gesture(self) -> &'static str {
        match self {
            Section::Hero => "waving",
            Section::Automations => "pointing",
            Section::LeadEngagement => "thinking",
            Section::Chatbots => "talking",
            Section::Calling => "gesturing",
            Section::Blockchain => "celebrating",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PoseTarget {
    /// Absolute rotation for one axis (`RotX`, `RotY` or `RotZ`).
    Rotation(Attr, f32),
    /// Offset from the part's rest position.
    Offset(Vec3),
    /// Emissive intensity.
    Glow(f32),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Pose {
    pub targets: Vec<(PartId, PoseTarget)>,
    /// Vertical offset added to the root target.
    pub bounce: f32,
}

impl Pose {
    fn arms(left_upper: f32, right_upper: f32, left_lower: f32, right_lower: f32) -> Self {
        Self {
            targets: vec![
                (PartId::LeftUpperArm, PoseTarget::Rotation(Attr::RotX, left_upper)),
                (PartId::RightUpperArm, PoseTarget::Rotation(Attr::RotX, right_upper)),
                (PartId::LeftLowerArm, PoseTarget::Rotation(Attr::RotX, left_lower)),
                (PartId::RightLowerArm, PoseTarget::Rotation(Attr::RotX, right_lower)),
            ],
            bounce: 0.0,
        }
    }

    fn with(mut self, part: PartId, target: PoseTarget) -> Self {
        self.targets.push((part, target));
        self
    }

    pub fn rotation(&self, part: PartId, axis: Attr) -> Option<f32> {
        self.targets.iter().find_map(|&(id, target)| match target {
            PoseTarget::Rotation(a, v) if id == part && a == axis => Some(v),
            _ => None,
        })
    }

    pub fn offset(&self, part: PartId) -> Option<Vec3> {
        self.targets.iter().find_map(|&(id, target)| match target {
            PoseTarget::Offset(v) if id == part => Some(v),
            _ => None,
        })
    }

    pub fn glow(&self, part: PartId) -> Option<f32> {
        self.targets.iter().find_map(|&(id, target)| match target {
            PoseTarget::Glow(v) if id == part => Some(v),
            _ => None,
        })
    }
}

pub fn pose(section: Section, t: f32) -> Pose {
    let breathing = t.sin() * 0.05;

    match section {
        Section::Hero => {
            let wave = (t * 3.0).sin();
            Pose::arms(0.2 + breathing, -1.2 + wave * 0.4, 0.0, -0.3 + wave * 0.3)
                .with(PartId::RightHand, PoseTarget::Offset(Vec3::new(0.0, wave * 0.2, 0.0)))
        }
        Section::Automations => Pose::arms(0.3, -1.3, 0.3, -0.8).with(
            PartId::FacePanel,
            PoseTarget::Glow(0.5 + (t * 4.0).sin() * 0.2),
        ),
        Section::LeadEngagement => Pose::arms(0.3, 1.5, 0.0, 1.8)
            // hand to chin: (1.8, 3.5, 0.8) in figure space
            .with(PartId::RightHand, PoseTarget::Offset(Vec3::new(0.0, 5.6, 0.8)))
            .with(PartId::Head, PoseTarget::Rotation(Attr::RotX, 0.2)),
        Section::Chatbots => {
            let talk = (t * 5.0).sin() * 0.2;
            Pose::arms(0.5 + talk, -0.5 - talk, 0.3, 0.3)
                .with(PartId::Head, PoseTarget::Rotation(Attr::RotY, (t * 6.0).sin() * 0.25))
                .with(PartId::Screen, PoseTarget::Glow(0.7 + (t * 8.0).sin() * 0.3))
        }
        Section::Calling => {
            let sweep = (t * 2.0).sin() * 0.3;
            Pose::arms(0.8 + sweep, -0.8 - sweep, 0.5, 0.5)
        }
        Section::Blockchain => {
            let mut p = Pose::arms(2.5, -2.5, -1.0, -1.0)
                .with(PartId::LeftHand, PoseTarget::Offset(Vec3::new(0.0, 0.6, 0.0)))
                .with(PartId::RightHand, PoseTarget::Offset(Vec3::new(0.0, 0.6, 0.0)));
            p.bounce = (t * 4.0).sin() * 0.15;
            p
        }
    }
}
