use serde::Serialize;

/// A virtual viewport preset. Sizes the render surface only; never part of
/// the widget tree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceConfig {
    pub id: &'static str,
    pub name: &'static str,
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
}

/// Built-in device catalog. The first entry is the default.
pub const DEVICES: &[DeviceConfig] = &[
    DeviceConfig {
        id: "iphone-15",
        name: "iPhone 15",
        width: 393.0,
        height: 852.0,
        pixel_ratio: 3.0,
    },
    DeviceConfig {
        id: "pixel-7",
        name: "Pixel 7",
        width: 412.0,
        height: 915.0,
        pixel_ratio: 2.6,
    },
    DeviceConfig {
        id: "ipad-pro",
        name: "iPad Pro",
        width: 834.0,
        height: 1194.0,
        pixel_ratio: 2.0,
    },
];

pub fn device_by_id(id: &str) -> Option<&'static DeviceConfig> {
    DEVICES.iter().find(|d| d.id == id)
}

impl Default for DeviceConfig {
    fn default() -> Self {
        DEVICES[0]
    }
}
