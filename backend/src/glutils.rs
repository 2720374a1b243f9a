use gl::{types::*, *};
use tracing::debug;

pub fn check_gl_err() {
    let err = unsafe { gl::GetError() };
    if err == gl::NO_ERROR {
        return;
    }
    panic!("error: {:?}", err);
}

pub fn log_opengl_info() {
    let mut mtu: i32 = 0;
    unsafe { gl::GetIntegerv(MAX_TEXTURE_IMAGE_UNITS, &mut mtu) };
    debug!(max_texture_image_units = mtu, "opengl limits");

    let mut size: i32 = 0;
    unsafe { gl::GetIntegerv(MAX_TEXTURE_SIZE, &mut size) };
    debug!(max_texture_size = size, "opengl limits");
}

pub fn gl_buffer_data_arr_stat<T: Sized>(buffer: &[T]) {
    unsafe {
        gl::BufferData(
            ARRAY_BUFFER,
            std::mem::size_of_val(buffer) as isize,
            buffer.as_ptr().cast(),
            STATIC_DRAW,
        )
    };
}

pub fn gl_buffer_data_element_stat<T: Sized>(buffer: &[T]) {
    unsafe {
        gl::BufferData(
            ELEMENT_ARRAY_BUFFER,
            std::mem::size_of_val(buffer) as isize,
            buffer.as_ptr().cast(),
            STATIC_DRAW,
        )
    };
}

pub fn gl_vertex_attrib_ptr_enab(index: u32, size: u32, stride: u32, pointer: usize) {
    unsafe {
        gl::VertexAttribPointer(
            index,
            size as i32,
            FLOAT,
            FALSE,
            (stride as usize * std::mem::size_of::<f32>()) as i32,
            (pointer * std::mem::size_of::<f32>()) as *const _,
        )
    };
    unsafe { gl::EnableVertexAttribArray(index) };
}

/// Uploads tightly packed RGBA8 pixels; linear filtering gives the smoothed look
/// when sprites are rotated.
pub fn texture_from_rgba(width: usize, height: usize, data: &[u8]) -> Result<u32, String> {
    let params = [
        (TEXTURE_2D, TEXTURE_WRAP_S, CLAMP_TO_EDGE),
        (TEXTURE_2D, TEXTURE_WRAP_T, CLAMP_TO_EDGE),
        (TEXTURE_2D, TEXTURE_MIN_FILTER, LINEAR),
        (TEXTURE_2D, TEXTURE_MAG_FILTER, LINEAR),
    ];
    texture_from_rgba_params(width, height, data, &params)
}

pub fn texture_from_rgba_params(
    width: usize,
    height: usize,
    data: &[u8],
    params: &[(GLenum, GLenum, GLenum)],
) -> Result<u32, String> {
    if data.len() != width * height * 4 {
        return Err(format!(
            "texture {}x{} expects {} bytes, got {}",
            width,
            height,
            width * height * 4,
            data.len()
        ));
    }

    let mut texture = 0;
    unsafe { gl::GenTextures(1, &mut texture) };
    unsafe { gl::BindTexture(TEXTURE_2D, texture) };

    for (t, n, p) in params {
        unsafe { gl::TexParameteri(*t, *n, *p as i32) };
    }

    unsafe {
        gl::TexImage2D(
            TEXTURE_2D,
            0,
            RGBA as i32,
            width as i32,
            height as i32,
            0,
            RGBA,
            UNSIGNED_BYTE,
            data.as_ptr().cast(),
        )
    };
    check_gl_err();

    Ok(texture)
}
