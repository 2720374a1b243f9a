use super::glutils::*;
use super::math::*;
use gl::*;
use std::ffi::CStr;

#[derive(Default, Clone, Copy)]
pub struct Shaders {
    program_id: u32,
}

impl Shaders {
    pub fn from_str(vertex_code: &str, fragment_code: &str) -> Result<Shaders, String> {
        // create vertex shader
        let vertex_shader = unsafe { gl::CreateShader(VERTEX_SHADER) };
        if vertex_shader == 0 {
            return Err("gl::createShader(VERTEX_SHADER) failed".to_string());
        }

        if let Err(e) = Self::compile(vertex_shader, vertex_code) {
            return Err(format!("vertex shader compilation error: {}", e));
        }

        // create fragment shader
        let fragment_shader = unsafe { gl::CreateShader(FRAGMENT_SHADER) };
        if fragment_shader == 0 {
            return Err("gl::createShader(FRAGMENT_SHADER) failed".to_string());
        }

        if let Err(e) = Self::compile(fragment_shader, fragment_code) {
            return Err(format!("fragment shader compilation error: {}", e));
        }

        // create program and link shaders
        let shader_program = unsafe { gl::CreateProgram() };
        unsafe { gl::AttachShader(shader_program, vertex_shader) };
        unsafe { gl::AttachShader(shader_program, fragment_shader) };
        unsafe { gl::LinkProgram(shader_program) };

        let mut success = 0;
        unsafe {
            gl::GetProgramiv(shader_program, LINK_STATUS, &mut success);
        }
        if success == 0 {
            let log = read_info_log(|cap, len, buf| unsafe {
                gl::GetProgramInfoLog(shader_program, cap, len, buf)
            });
            return Err(format!("program link error: {}", log));
        }

        // not needed anymore
        unsafe { gl::DeleteShader(vertex_shader) };
        unsafe { gl::DeleteShader(fragment_shader) };

        Ok(Shaders {
            program_id: shader_program,
        })
    }

    fn compile(shader_id: u32, shader_code: &str) -> Result<(), String> {
        let len = i32::try_from(shader_code.len()).map_err(|e| e.to_string())?;
        unsafe {
            gl::ShaderSource(
                shader_id,
                1,
                &(shader_code.as_bytes().as_ptr().cast()),
                &len,
            );
        }

        unsafe { gl::CompileShader(shader_id) };

        // check if there are compilation errors
        let mut success = 0;
        unsafe {
            gl::GetShaderiv(shader_id, COMPILE_STATUS, &mut success);
        }

        if success == 0 {
            return Err(read_info_log(|cap, len, buf| unsafe {
                gl::GetShaderInfoLog(shader_id, cap, len, buf)
            }));
        }
        Ok(())
    }

    fn get_uniform_location(&self, c_name: &CStr) -> i32 {
        let location = unsafe { gl::GetUniformLocation(self.program_id, c_name.as_ptr().cast()) };
        check_gl_err();
        if location == -1 {
            let name = c_name.to_str().unwrap_or("<cstring decoding error>");
            panic!(
                "program({}): location '{}' does not correspond to an active uniform variable in program",
                self.program_id,
                name
            );
        }
        location
    }

    pub fn use_program(&self) {
        unsafe { gl::UseProgram(self.program_id) };
        check_gl_err();
    }

    pub fn set_i32(&self, name: &CStr, value: i32) {
        unsafe { gl::Uniform1i(self.get_uniform_location(name), value) };
    }

    pub fn set_mat4fv(&self, name: &CStr, mat: &Mat4x4) {
        let location = self.get_uniform_location(name);
        let arr = mat.as_cols();
        unsafe { gl::UniformMatrix4fv(location, 1, FALSE, arr.as_ptr()) };
    }
}

fn read_info_log(fetch: impl FnOnce(i32, &mut i32, *mut gl::types::GLchar)) -> String {
    let mut v: Vec<u8> = vec![0; 1024];
    let mut log_len = 0_i32;
    fetch(v.len() as i32, &mut log_len, v.as_mut_ptr().cast());
    v.truncate(usize::try_from(log_len).unwrap_or(0));
    String::from_utf8_lossy(&v).to_string()
}
