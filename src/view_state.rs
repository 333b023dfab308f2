use crate::shapes::ShapeVariant;

pub const DEFAULT_MOBILE_BREAKPOINT: f32 = 768.0;

/// Which overlay panel covers the scene. At most one is ever open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    /// Service dashboard; shows contact cards when the shape is `Idle`.
    Contact,
    Portfolio,
    Clients,
    Legacy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DeviceClass {
    #[default]
    Desktop,
    Mobile,
}

impl DeviceClass {
    pub fn from_width(width: f32, breakpoint: f32) -> Self {
        if width < breakpoint {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == DeviceClass::Mobile
    }
}

/// UI-level state that decides what the scene shows and how it is framed.
/// Only user handlers mutate it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    overlay: Overlay,
    shape: ShapeVariant,
    device: DeviceClass,
    breakpoint: f32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_MOBILE_BREAKPOINT)
    }
}

impl ViewState {
    pub fn new(breakpoint: f32) -> Self {
        Self {
            overlay: Overlay::None,
            shape: ShapeVariant::Idle,
            device: DeviceClass::Desktop,
            breakpoint,
        }
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    pub fn shape(&self) -> ShapeVariant {
        self.shape
    }

    pub fn device(&self) -> DeviceClass {
        self.device
    }

    pub fn open_contact(&mut self) {
        self.transition(Overlay::Contact, ShapeVariant::Idle);
    }

    /// Morph to `shape` and show its dashboard.
    pub fn select_shape(&mut self, shape: ShapeVariant) {
        self.transition(Overlay::Contact, shape);
    }

    pub fn open_portfolio(&mut self) {
        self.transition(Overlay::Portfolio, ShapeVariant::Idle);
    }

    pub fn open_clients(&mut self) {
        self.transition(Overlay::Clients, ShapeVariant::Idle);
    }

    pub fn open_legacy(&mut self) {
        self.transition(Overlay::Legacy, ShapeVariant::Idle);
    }

    pub fn close_overlay(&mut self) {
        self.transition(Overlay::None, ShapeVariant::Idle);
    }

    /// Reclassify the device from the current viewport width. Returns `true`
    /// when the class changed.
    pub fn set_viewport_width(&mut self, width: f32) -> bool {
        let device = DeviceClass::from_width(width, self.breakpoint);
        if device == self.device {
            return false;
        }
        tracing::debug!(width, ?device, "device class changed");
        self.device = device;
        true
    }

    pub fn is_contact_open(&self) -> bool {
        self.overlay == Overlay::Contact
    }

    pub fn is_portfolio_open(&self) -> bool {
        self.overlay == Overlay::Portfolio
    }

    pub fn is_clients_open(&self) -> bool {
        self.overlay == Overlay::Clients
    }

    pub fn is_legacy_open(&self) -> bool {
        self.overlay == Overlay::Legacy
    }

    pub fn is_mobile(&self) -> bool {
        self.device.is_mobile()
    }

    fn transition(&mut self, overlay: Overlay, shape: ShapeVariant) {
        if self.overlay != overlay || self.shape != shape {
            tracing::debug!(from = ?self.overlay, to = ?overlay, shape = shape.tag(), "view transition");
        }
        self.overlay = overlay;
        self.shape = shape;
    }
}
