// Shared tuning constants for the cart widget and the plant viewer.

// Cart endpoint and DOM contract
pub const CART_ENDPOINT: &str = "/api/cart";
pub const CART_BADGE_ID: &str = "cart-badge";
pub const CART_ENDPOINT_ATTR: &str = "data-cart-endpoint"; // optional override on the badge

// Notifications
pub const NOTIFY_DISMISS_MS: u32 = 3000;
pub const NOTIFY_STYLE: &str = "position:fixed;top:20px;right:20px;z-index:9999;min-width:250px";

pub const MSG_ADD_OK: &str = "Product added to cart!";
pub const MSG_ADD_FAILED: &str = "Failed to add product to cart";
pub const MSG_REMOVE_OK: &str = "Product removed from cart";
pub const MSG_REMOVE_FAILED: &str = "Failed to remove product from cart";

// Viewer DOM contract
pub const VIEWER_CONTAINER_ID: &str = "viewer-container";

// Camera
pub const CAMERA_FOV_Y_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_START_DISTANCE: f32 = 5.0;
pub const CAMERA_MIN_DISTANCE: f32 = 2.0;
pub const CAMERA_MAX_DISTANCE: f32 = 10.0;

// Interaction
pub const DRAG_RADIANS_PER_PX: f32 = 0.01;
pub const WHEEL_DISTANCE_PER_UNIT: f32 = 0.01;
pub const IDLE_SPIN_PER_FRAME: f32 = 0.005; // radians of yaw per animation frame

// Scene
pub const BACKGROUND_HEX: u32 = 0x87CEEB; // sky blue
pub const SPHERE_HEX: u32 = 0x52B788;
pub const SPHERE_SPECULAR_HEX: u32 = 0x111111;
pub const SPHERE_SHININESS: f32 = 100.0;
pub const SPHERE_RADIUS: f32 = 1.0;
pub const SPHERE_WIDTH_SEGMENTS: u32 = 32;
pub const SPHERE_HEIGHT_SEGMENTS: u32 = 32;

// Lights (both white)
pub const AMBIENT_INTENSITY: f32 = 0.6;
pub const DIRECTIONAL_INTENSITY: f32 = 0.8;
pub const DIRECTIONAL_POSITION: [f32; 3] = [5.0, 5.0, 5.0];

// MSAA sample count for the viewer's colour target
pub const MSAA_SAMPLES: u32 = 4;

/// Convert a `0xRRGGBB` sRGB colour into linear RGB components.
#[inline]
pub fn hex_to_linear(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| {
        let c = ((hex >> shift) & 0xFF) as f32 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    [channel(16), channel(8), channel(0)]
}
