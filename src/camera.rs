//! Camera framing driven by the view state.
use crate::animations::easing::{approach, smoothing_factor};
use crate::view_state::{DeviceClass, Overlay, ViewState};
use glam::{Mat4, Vec3};
use std::f32::consts::FRAC_PI_2;

pub const DEFAULT_FOV_DEGREES: f32 = 45.0;
pub const DEFAULT_SMOOTHING: f32 = 3.0;
const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 100.0;

/// Target framing for a view state: distance from `look_at`, and the orbit
/// angle around the y axis (0 looks down -z).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub distance: f32,
    pub orbit: f32,
    pub look_at: Vec3,
}

impl CameraPose {
    pub fn for_view(view: &ViewState) -> Self {
        let (desktop, mobile, orbit, look_at) = match view.overlay() {
            Overlay::Portfolio => (5.0, 7.0, FRAC_PI_2, Vec3::new(3.0, 0.0, 0.0)),
            Overlay::Clients | Overlay::Legacy => (14.0, 17.0, 0.0, Vec3::ZERO),
            Overlay::Contact if view.shape().is_idle() => (10.0, 13.0, 0.0, Vec3::ZERO),
            Overlay::None if view.shape().is_idle() => (9.0, 12.0, 0.0, Vec3::ZERO),
            Overlay::None | Overlay::Contact => (6.5, 9.5, 0.0, Vec3::ZERO),
        };
        let distance = match view.device() {
            DeviceClass::Desktop => desktop,
            DeviceClass::Mobile => mobile,
        };
        Self {
            distance,
            orbit,
            look_at,
        }
    }

    pub fn eye(&self) -> Vec3 {
        self.look_at + Vec3::new(self.orbit.sin(), 0.0, self.orbit.cos()) * self.distance
    }
}

/// Live camera, eased toward a `CameraPose` every frame.
#[derive(Clone, Debug)]
pub struct CameraRig {
    pose: CameraPose,
    fov_y: f32,
    smoothing: f32,
}

impl CameraRig {
    pub fn new(initial: CameraPose, fov_degrees: f32, smoothing: f32) -> Self {
        Self {
            pose: initial,
            fov_y: fov_degrees.to_radians(),
            smoothing,
        }
    }

    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    pub fn eye(&self) -> Vec3 {
        self.pose.eye()
    }

    pub fn update(&mut self, target: CameraPose, delta: f32) {
        let k = smoothing_factor(self.smoothing, delta);
        let pose = &mut self.pose;
        pose.distance = approach(pose.distance, target.distance, k);
        pose.orbit = approach(pose.orbit, target.orbit, k);
        pose.look_at = pose.look_at.lerp(target.look_at, k);
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.pose.look_at, Vec3::Y)
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, aspect.max(1e-3), Z_NEAR, Z_FAR)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection(aspect) * self.view()
    }
}

/// Size in world units of the visible plane `distance` away from a camera.
pub fn viewport_world_size(distance: f32, fov_y: f32, aspect: f32) -> (f32, f32) {
    let height = 2.0 * (fov_y * 0.5).tan() * distance;
    (height * aspect, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ShapeVariant;

    fn view_with(f: impl FnOnce(&mut ViewState)) -> ViewState {
        let mut view = ViewState::default();
        f(&mut view);
        view
    }

    #[test]
    fn pose_table() {
        let idle = CameraPose::for_view(&ViewState::default());
        assert_eq!(idle.distance, 9.0);
        assert_eq!(idle.look_at, Vec3::ZERO);

        let contact = CameraPose::for_view(&view_with(|v| v.open_contact()));
        assert_eq!(contact.distance, 10.0);

        let service = CameraPose::for_view(&view_with(|v| v.select_shape(ShapeVariant::Studio)));
        assert_eq!(service.distance, 6.5);

        let portfolio = CameraPose::for_view(&view_with(|v| v.open_portfolio()));
        assert_eq!(portfolio.distance, 5.0);
        assert_eq!(portfolio.orbit, FRAC_PI_2);
        assert_eq!(portfolio.look_at, Vec3::new(3.0, 0.0, 0.0));

        let legacy = CameraPose::for_view(&view_with(|v| v.open_legacy()));
        assert_eq!(legacy.distance, 14.0);
    }

    #[test]
    fn mobile_frames_from_further_back() {
        let mobile = view_with(|v| {
            v.set_viewport_width(500.0);
        });
        assert_eq!(CameraPose::for_view(&mobile).distance, 12.0);

        let portfolio = view_with(|v| {
            v.set_viewport_width(400.0);
            v.open_portfolio();
        });
        assert_eq!(CameraPose::for_view(&portfolio).distance, 7.0);
    }

    #[test]
    fn idle_eye_sits_on_the_z_axis() {
        let pose = CameraPose::for_view(&ViewState::default());
        let eye = pose.eye();
        assert!(eye.x.abs() < 1e-6 && eye.y.abs() < 1e-6);
        assert!((eye.z - 9.0).abs() < 1e-6);
    }

    #[test]
    fn rig_converges_on_the_target_pose() {
        let start = CameraPose::for_view(&ViewState::default());
        let target = CameraPose::for_view(&view_with(|v| v.open_portfolio()));
        let mut rig = CameraRig::new(start, DEFAULT_FOV_DEGREES, DEFAULT_SMOOTHING);

        let mut previous = (rig.eye() - target.eye()).length();
        for _ in 0..30 {
            rig.update(target, 1.0 / 60.0);
            let d = (rig.eye() - target.eye()).length();
            assert!(d < previous);
            previous = d;
        }
        for _ in 0..600 {
            rig.update(target, 1.0 / 60.0);
        }
        assert!((rig.eye() - target.eye()).length() < 1e-3);
    }

    #[test]
    fn look_at_projects_to_the_viewport_centre() {
        let target = CameraPose::for_view(&view_with(|v| v.open_portfolio()));
        let rig = CameraRig::new(target, DEFAULT_FOV_DEGREES, DEFAULT_SMOOTHING);
        let clip = rig.view_projection(16.0 / 9.0) * target.look_at.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn visible_plane_matches_the_legal_camera() {
        let (w, h) = viewport_world_size(10.0, 60f32.to_radians(), 2.0);
        assert!((h - 11.547).abs() < 1e-3);
        assert!((w - 2.0 * h).abs() < 1e-4);
    }
}
