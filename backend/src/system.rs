use gl;
use sdl2;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
pub use sdl2::keyboard::Scancode;
use sdl2::video::{GLProfile, SwapInterval};
use std::time::Duration;
use tracing::{info, warn};

pub struct System {
    pub w: usize,
    pub h: usize,
    pub sdl_context: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub window: sdl2::video::Window,
    pub gl_ctx: sdl2::video::GLContext,
    event_pump: sdl2::EventPump,
    frame_interval: Duration,
}

impl System {
    pub fn new(title: &str, w: usize, h: usize) -> Result<System, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(GLProfile::Core);
        gl_attr.set_context_version(3, 3);

        let window = match video_subsystem
            .window(title, w as u32, h as u32)
            .opengl()
            .build()
        {
            Ok(w) => w,
            Err(e) => return Err(format!("Error while building OpenGL window: {e}")),
        };

        let gl_ctx = window.gl_create_context()?;
        gl::load_with(|name| video_subsystem.gl_get_proc_address(name) as *const _);

        debug_assert_eq!(gl_attr.context_profile(), GLProfile::Core);
        debug_assert_eq!(gl_attr.context_version(), (3, 3));

        if let Err(e) = video_subsystem.gl_set_swap_interval(SwapInterval::VSync) {
            // presenting still works, just without tearing protection
            warn!(error = %e, "vsync unavailable");
        }

        // HiDPI displays hand back a larger drawable than the logical window
        let (dw, dh) = window.drawable_size();
        unsafe {
            gl::Viewport(0, 0, dw as i32, dh as i32);
            gl::Enable(gl::BLEND);
            gl::BlendFunc(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA);
        }

        let event_pump = sdl_context.event_pump()?;

        info!(title, w, h, drawable_w = dw, drawable_h = dh, "window created");

        Ok(System {
            w,
            h,
            sdl_context,
            window,
            video_subsystem,
            gl_ctx,
            event_pump,
            frame_interval: Duration::from_secs(1) / 60,
        })
    }

    /// Sleep inserted after every present, on top of whatever vsync waits.
    pub fn set_frame_rate(&mut self, fps: u32) {
        self.frame_interval = Duration::from_secs(1) / fps.max(1);
    }

    /// Drains pending window events; false once the user asked to quit.
    pub fn process_io_events(&mut self) -> bool {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => return false,
                _ => {}
            }
        }
        true
    }

    pub fn is_pressed(&self, key: Scancode) -> bool {
        self.event_pump.keyboard_state().is_scancode_pressed(key)
    }

    pub fn center(&self) -> (f32, f32) {
        (self.w as f32 / 2.0, self.h as f32 / 2.0)
    }

    pub fn draw_to_screen(&mut self) {
        self.window.gl_swap_window();
        ::std::thread::sleep(self.frame_interval);
    }

    pub fn clear_screen(&mut self, r: f32, g: f32, b: f32) {
        unsafe {
            gl::ClearColor(r, g, b, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }
}
