//! Per-frame animation driver for the robot figure.

use std::collections::BTreeMap;
use std::f32::consts::PI;

use glam::Vec3;
use log::debug;

use crate::config::RigConfig;
use crate::rig::part::{rest, Attr, PartId, Scene};
use crate::rig::pose::{pose, Section};
use crate::rig::smoothing::{approach, Rate};

/// Parts whose position is pulled back to rest every frame.
const POSITIONED: [PartId; 12] = [
    PartId::LeftUpperArm,
    PartId::RightUpperArm,
    PartId::LeftLowerArm,
    PartId::RightLowerArm,
    PartId::LeftHand,
    PartId::RightHand,
    PartId::LeftUpperLeg,
    PartId::RightUpperLeg,
    PartId::LeftLowerLeg,
    PartId::RightLowerLeg,
    PartId::LeftFoot,
    PartId::RightFoot,
];

const ARMS: [PartId; 4] = [
    PartId::LeftUpperArm,
    PartId::RightUpperArm,
    PartId::LeftLowerArm,
    PartId::RightLowerArm,
];

const GAIT_FREQUENCY: f32 = 8.0;
const BLINK_FREQUENCY: f32 = 2.0;
const BLINK_PEAK: f32 = 0.97;
pub const BLINK_CLOSED: f32 = 0.1;
/// Screen ring roll per frame.
const RING_SPIN: f32 = 0.02;
const FACE_GLOW: f32 = 0.3;

/// Desired value of every tracked attribute for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TargetState {
    values: BTreeMap<(PartId, Attr), (f32, Rate)>,
}

impl TargetState {
    fn set(&mut self, part: PartId, attr: Attr, value: f32, rate: Rate) {
        self.values.insert((part, attr), (value, rate));
    }

    pub fn get(&self, part: PartId, attr: Attr) -> Option<f32> {
        self.values.get(&(part, attr)).map(|&(v, _)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PartId, Attr, f32, Rate)> + '_ {
        self.values
            .iter()
            .map(|(&(part, attr), &(value, rate))| (part, attr, value, rate))
    }
}

/// Eye scale the blink asks for at time `t`.
pub fn blink_target(t: f32) -> f32 {
    if (t * BLINK_FREQUENCY).sin() > BLINK_PEAK {
        BLINK_CLOSED
    } else {
        1.0
    }
}

/// Absolute targets for one frame: rest pose plus section, idle and gait offsets.
pub fn targets(config: &RigConfig, progress: f32, t: f32, moving: bool) -> TargetState {
    let mut out = TargetState::default();
    let section = Section::from_progress(progress);
    let pose = pose(section, t);

    // Figure travel is linear in progress before smoothing.
    let x = config.start_x + (config.end_x - config.start_x) * progress;
    let y = config.top_y + (config.bottom_y - config.top_y) * progress + pose.bounce;
    out.set(PartId::Root, Attr::PosX, x, Rate::Body);
    out.set(PartId::Root, Attr::PosY, y, Rate::Body);
    out.set(PartId::Root, Attr::RotY, (progress * PI).sin() * config.sway, Rate::Body);

    for id in POSITIONED {
        let target = rest(id).position + pose.offset(id).unwrap_or(Vec3::ZERO);
        out.set(id, Attr::PosX, target.x, Rate::Limb);
        out.set(id, Attr::PosY, target.y, Rate::Limb);
        out.set(id, Attr::PosZ, target.z, Rate::Limb);
    }

    // Idle head motion unless the pose takes over an axis.
    let head_pitch = pose
        .rotation(PartId::Head, Attr::RotX)
        .unwrap_or((t * 1.2).sin() * 0.08);
    let head_yaw = pose
        .rotation(PartId::Head, Attr::RotY)
        .unwrap_or((t * 1.5).sin() * 0.15);
    out.set(PartId::Head, Attr::RotX, head_pitch, Rate::Limb);
    out.set(PartId::Head, Attr::RotY, head_yaw, Rate::Limb);

    for id in ARMS {
        let r = rest(id).rotation;
        out.set(id, Attr::RotX, pose.rotation(id, Attr::RotX).unwrap_or(r.x), Rate::Limb);
        out.set(id, Attr::RotZ, r.z, Rate::Limb);
    }

    let (lu, ru, ll, rl) = if moving {
        let s = (t * GAIT_FREQUENCY).sin();
        (s * 0.2, -s * 0.2, (s * 0.3).max(0.0), (-s * 0.3).max(0.0))
    } else {
        (0.0, 0.0, 0.0, 0.0)
    };
    out.set(PartId::LeftUpperLeg, Attr::RotX, lu, Rate::Gait);
    out.set(PartId::RightUpperLeg, Attr::RotX, ru, Rate::Gait);
    out.set(PartId::LeftLowerLeg, Attr::RotX, ll, Rate::Gait);
    out.set(PartId::RightLowerLeg, Attr::RotX, rl, Rate::Gait);

    let blink = blink_target(t);
    out.set(PartId::LeftEye, Attr::ScaleY, blink, Rate::Blink);
    out.set(PartId::RightEye, Attr::ScaleY, blink, Rate::Blink);

    let screen = pose
        .glow(PartId::Screen)
        .unwrap_or(0.5 + (t * 2.0).sin() * 0.2);
    let face = pose.glow(PartId::FacePanel).unwrap_or(FACE_GLOW);
    out.set(PartId::Screen, Attr::Glow, screen, Rate::Limb);
    out.set(PartId::FacePanel, Attr::Glow, face, Rate::Limb);
    out.set(PartId::AntennaTip, Attr::Glow, 0.6 + (t * 3.0).sin() * 0.3, Rate::Limb);

    out.set(
        PartId::ScreenRing,
        Attr::RotZ,
        RING_SPIN * t / config.time_step,
        Rate::Limb,
    );

    out
}

/// Animation state owned by one mounted robot.
#[derive(Debug, Clone)]
pub struct RobotRig {
    config: RigConfig,
    scene: Scene,
    elapsed: f32,
    last_progress: f32,
    section: Section,
    moving: bool,
}

impl RobotRig {
    pub fn new(config: RigConfig) -> Self {
        let scene = Scene::robot(Vec3::from(config.mount_position));
        Self::with_scene(config, scene)
    }

    pub fn with_scene(config: RigConfig, scene: Scene) -> Self {
        Self {
            config,
            scene,
            elapsed: 0.0,
            last_progress: 0.0,
            section: Section::Hero,
            moving: false,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    /// Advances one frame and returns the section now in view.
    pub fn tick(&mut self, progress: f32) -> Section {
        let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
        self.elapsed += self.config.time_step;

        let section = Section::from_progress(progress);
        if section != self.section {
            debug!(
                "robot pose {} -> {} (progress {:.3})",
                self.section.gesture(),
                section.gesture(),
                progress
            );
            self.section = section;
        }

        self.moving = (progress - self.last_progress).abs() > self.config.moving_threshold;
        let targets = targets(&self.config, progress, self.elapsed, self.moving);
        self.apply(&targets);
        self.last_progress = progress;
        section
    }

    fn apply(&mut self, targets: &TargetState) {
        let rates = self.config.smoothing;
        for (id, attr, value, rate) in targets.iter() {
            // Parts that are not constructed are skipped.
            if let Some(slot) = self.scene.part_mut(id).and_then(|p| p.slot(attr)) {
                *slot = approach(*slot, value, rates.k(rate));
            }
        }

        for (eye, pupil) in [
            (PartId::LeftEye, PartId::LeftPupil),
            (PartId::RightEye, PartId::RightPupil),
        ] {
            if let Some(scale) = self.scene.part(eye).map(|p| p.scale.y) {
                if let Some(p) = self.scene.part_mut(pupil) {
                    p.scale.y = scale;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(rig: &RobotRig, id: PartId, attr: Attr) -> f32 {
        rig.scene().part(id).and_then(|p| p.get(attr)).unwrap()
    }

    #[test]
    fn root_x_maps_progress_linearly() {
        let config = RigConfig::default();
        let at = |p: f32| targets(&config, p, 0.0, false).get(PartId::Root, Attr::PosX).unwrap();
        assert_eq!(at(0.0), config.start_x);
        assert_eq!(at(1.0), config.end_x);
        assert!((at(0.5) - (config.start_x + config.end_x) / 2.0).abs() < 1e-5);
        assert!((at(0.2) - (-10.0)).abs() < 1e-5);
    }

    #[test]
    fn root_y_travels_top_to_bottom() {
        let config = RigConfig::default();
        let at = |p: f32| targets(&config, p, 0.0, false).get(PartId::Root, Attr::PosY).unwrap();
        assert_eq!(at(0.0), 15.0);
        assert!((at(0.5)).abs() < 1e-5);
        // t = 0 means no celebration bounce yet
        assert_eq!(at(1.0), -15.0);
    }

    #[test]
    fn targets_are_rest_plus_offset() {
        let config = RigConfig::default();
        let t = targets(&config, 0.3, 1.0, false);
        for id in POSITIONED {
            if id == PartId::LeftHand || id == PartId::RightHand {
                continue;
            }
            let r = rest(id).position;
            assert_eq!(t.get(id, Attr::PosX), Some(r.x));
            assert_eq!(t.get(id, Attr::PosY), Some(r.y));
            assert_eq!(t.get(id, Attr::PosZ), Some(r.z));
        }
        // identical inputs give identical targets
        assert_eq!(t, targets(&config, 0.3, 1.0, false));
    }

    #[test]
    fn smoothing_moves_toward_target_without_overshoot() {
        let mut rig = RobotRig::new(RigConfig::default());
        let mut prev = value(&rig, PartId::Root, Attr::PosX);
        for _ in 0..50 {
            rig.tick(0.0);
            let now = value(&rig, PartId::Root, Attr::PosX);
            assert!(now < prev, "root x must approach -15 from -12");
            assert!(now > -15.0);
            prev = now;
        }
    }

    #[test]
    fn first_tick_does_not_snap_to_target() {
        let config = RigConfig::default();
        let mut rig = RobotRig::new(config.clone());
        rig.tick(0.0);
        let x = value(&rig, PartId::Root, Attr::PosX);
        let expected = -12.0 + (-15.0 - -12.0) * config.smoothing.body;
        assert!((x - expected).abs() < 1e-5);
    }

    #[test]
    fn blink_scale_stays_bounded() {
        let mut rig = RobotRig::new(RigConfig::default());
        let mut closed_seen = false;
        for _ in 0..5000 {
            rig.tick(0.0);
            for id in [PartId::LeftEye, PartId::RightEye, PartId::LeftPupil] {
                let s = value(&rig, id, Attr::ScaleY);
                assert!((BLINK_CLOSED..=1.0).contains(&s), "scale {} out of range", s);
            }
            closed_seen |= value(&rig, PartId::LeftEye, Attr::ScaleY) < 0.5;
        }
        assert!(closed_seen, "eyes should blink within 50 time units");
    }

    #[test]
    fn blink_target_only_takes_two_values() {
        for i in 0..10_000 {
            let b = blink_target(i as f32 * 0.013);
            assert!(b == BLINK_CLOSED || b == 1.0);
        }
        // sin(2t) peaks at t = pi/4
        assert_eq!(blink_target(PI / 4.0), BLINK_CLOSED);
        assert_eq!(blink_target(0.0), 1.0);
    }

    #[test]
    fn pupils_follow_eyes() {
        let mut rig = RobotRig::new(RigConfig::default());
        for _ in 0..400 {
            rig.tick(0.1);
            assert_eq!(
                value(&rig, PartId::LeftPupil, Attr::ScaleY),
                value(&rig, PartId::LeftEye, Attr::ScaleY)
            );
        }
    }

    #[test]
    fn scroll_jump_switches_to_celebrating_and_converges() {
        let mut rig = RobotRig::new(RigConfig::default());
        for _ in 0..30 {
            assert_eq!(rig.tick(0.05), Section::Hero);
        }
        assert_eq!(rig.tick(0.95), Section::Blockchain);
        assert!(rig.is_moving());

        let arm = value(&rig, PartId::LeftUpperArm, Attr::RotX);
        assert!((arm - 2.5).abs() > 1.0, "arm must not snap to the new pose");

        let mut distance = (arm - 2.5).abs();
        for _ in 0..120 {
            assert_eq!(rig.tick(0.95), Section::Blockchain);
            let d = (value(&rig, PartId::LeftUpperArm, Attr::RotX) - 2.5).abs();
            assert!(d < distance);
            distance = d;
        }
        assert!(distance < 0.01);
        assert!((value(&rig, PartId::RightUpperArm, Attr::RotX) + 2.5).abs() < 0.01);
        assert!(!rig.is_moving());
    }

    #[test]
    fn walking_only_while_progress_changes() {
        let mut rig = RobotRig::new(RigConfig::default());
        let mut p = 0.0;
        for _ in 0..40 {
            p += 0.002;
            rig.tick(p);
            assert!(rig.is_moving());
        }
        let swinging = (0..40)
            .map(|_| {
                p += 0.002;
                rig.tick(p);
                value(&rig, PartId::LeftUpperLeg, Attr::RotX).abs()
            })
            .fold(0.0_f32, f32::max);
        assert!(swinging > 0.05);

        for _ in 0..200 {
            rig.tick(p);
        }
        assert!(!rig.is_moving());
        assert!(value(&rig, PartId::LeftUpperLeg, Attr::RotX).abs() < 1e-3);
        assert!(value(&rig, PartId::RightLowerLeg, Attr::RotX).abs() < 1e-3);
    }

    #[test]
    fn lower_legs_only_bend_one_way() {
        let config = RigConfig::default();
        for i in 0..500 {
            let t = targets(&config, 0.4, i as f32 * 0.01, true);
            assert!(t.get(PartId::LeftLowerLeg, Attr::RotX).unwrap() >= 0.0);
            assert!(t.get(PartId::RightLowerLeg, Attr::RotX).unwrap() >= 0.0);
        }
    }

    #[test]
    fn missing_parts_are_skipped() {
        let scene = Scene::with_parts([PartId::Head, PartId::Body], Vec3::ZERO);
        let mut rig = RobotRig::with_scene(RigConfig::default(), scene);
        for i in 0..100 {
            rig.tick(i as f32 / 100.0);
        }
        assert!(rig.scene().part(PartId::LeftEye).is_none());
        assert_ne!(value(&rig, PartId::Head, Attr::RotY), 0.0);
        assert_eq!(rig.scene().len(), 3);
    }

    #[test]
    fn elapsed_time_advances_by_fixed_step() {
        let mut rig = RobotRig::new(RigConfig::default());
        for _ in 0..100 {
            rig.tick(0.5);
        }
        assert!((rig.elapsed() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn instances_do_not_share_state() {
        let mut a = RobotRig::new(RigConfig::default());
        let b = RobotRig::new(RigConfig::default());
        for _ in 0..10 {
            a.tick(1.0);
        }
        assert_eq!(b.elapsed(), 0.0);
        assert_eq!(b.section(), Section::Hero);
        assert_eq!(value(&b, PartId::Root, Attr::PosX), -12.0);
    }
}
