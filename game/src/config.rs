//! Runtime/window constants (not gameplay tuning, see `tuning`).

pub const WINDOW_TITLE: &str = "Spaceship";
pub const WINDOW_WIDTH: usize = 600;
pub const WINDOW_HEIGHT: usize = 600;

/// Render loop cap, independent of the physics tick and of vsync.
pub const FRAME_RATE: u32 = 120;

/// Dark blue backdrop, (0, 0, 139) in 8-bit RGB.
pub const CLEAR_COLOR: (f32, f32, f32) = (0.0, 0.0, 139.0 / 255.0);

/// Worker threads of the runtime the physics task runs on.
pub const PHYSICS_WORKER_THREADS: usize = 2;
