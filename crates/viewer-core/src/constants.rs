// Fixed viewer tuning shared by the core and the web frontend.

// Initial canvas backing size before the first window resize
pub const CANVAS_WIDTH: u32 = 1440;
pub const CANVAS_HEIGHT: u32 = 530;

// Uniform scale applied to a model at load time
pub const MODEL_SCALE: f32 = 2.0;

// Camera parameters (vertical fov in degrees)
pub const CAMERA_EYE: [f32; 3] = [0.0, 0.0, 5.0];
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Node name that marks the highlightable sub-part in the source file
pub const TOP_PART_NODE_NAME: &str = "Circle003";

// Color swapped in when the sub-part highlight is on (pure blue)
pub const HIGHLIGHT_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

// Only file names with this suffix are accepted by the file input
pub const MODEL_FILE_EXTENSION: &str = ".glb";

// Static part properties shown in the modal. These are fixed placeholders
// and do not depend on the loaded file.
pub const PART_DESCRIPTION: &str = "Flanged ball valve with pneumatic actuator";
pub const PART_DIAMETER: &str = "80";
pub const PART_PRESSURE: &str = "10,0";
