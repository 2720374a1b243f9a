use super::glutils::*;
use super::math::*;
use super::shaders::Shaders;
use gl::*;

const VERTEX_SHADER: &str = r#"#version 330 core
layout (location = 0) in vec2 aPos;
layout (location = 1) in vec2 aTexCoord;

uniform mat4 projection;
uniform mat4 model;

out vec2 TexCoord;

void main() {
    gl_Position = projection * model * vec4(aPos, 0.0, 1.0);
    TexCoord = aTexCoord;
}
"#;

const FRAGMENT_SHADER: &str = r#"#version 330 core
in vec2 TexCoord;
out vec4 FragColor;

uniform sampler2D sprite;

void main() {
    FragColor = texture(sprite, TexCoord);
}
"#;

/// Compiles the program every sprite is drawn with. Callers set `projection`
/// once per frame; `Sprite::draw` sets `model`.
pub fn sprite_shaders() -> Result<Shaders, String> {
    let shaders = Shaders::from_str(VERTEX_SHADER, FRAGMENT_SHADER)?;
    shaders.use_program();
    shaders.set_i32(c"sprite", 0);
    Ok(shaders)
}

/// Corners of a `width` x `height` quad centred on the origin, as
/// `[x, y, u, v]`. Texture rows are top-down, so the top edge samples v = 0.
pub fn quad_vertices(width: f32, height: f32) -> [f32; 16] {
    let (hw, hh) = (width / 2.0, height / 2.0);
    #[rustfmt::skip]
    let v = [
        -hw, -hh, 0.0, 1.0,
         hw, -hh, 1.0, 1.0,
         hw,  hh, 1.0, 0.0,
        -hw,  hh, 0.0, 0.0,
    ];
    v
}

const QUAD_INDICES: [u32; 6] = [0, 1, 2, 2, 3, 0];

/// Textured quad sized to its image, drawn centred on the model origin.
pub struct Sprite {
    vao: u32,
    vbo: u32,
    ebo: u32,
    texture: u32,
    pub width: usize,
    pub height: usize,
}

impl Sprite {
    pub fn new(width: usize, height: usize, rgba: &[u8]) -> Result<Sprite, String> {
        let texture = texture_from_rgba(width, height, rgba)?;

        let (mut vao, mut vbo, mut ebo) = (0, 0, 0);
        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::GenBuffers(1, &mut vbo);
            gl::GenBuffers(1, &mut ebo);
            gl::BindVertexArray(vao);
            gl::BindBuffer(ARRAY_BUFFER, vbo);
        }
        gl_buffer_data_arr_stat(&quad_vertices(width as f32, height as f32));
        unsafe { gl::BindBuffer(ELEMENT_ARRAY_BUFFER, ebo) };
        gl_buffer_data_element_stat(&QUAD_INDICES);

        gl_vertex_attrib_ptr_enab(0, 2, 4, 0);
        gl_vertex_attrib_ptr_enab(1, 2, 4, 2);

        unsafe { gl::BindVertexArray(0) };
        check_gl_err();

        Ok(Sprite {
            vao,
            vbo,
            ebo,
            texture,
            width,
            height,
        })
    }

    pub fn draw(&self, shaders: &Shaders, model: &Mat4x4) {
        shaders.set_mat4fv(c"model", model);
        unsafe {
            gl::ActiveTexture(TEXTURE0);
            gl::BindTexture(TEXTURE_2D, self.texture);
            gl::BindVertexArray(self.vao);
            gl::DrawElements(
                TRIANGLES,
                QUAD_INDICES.len() as i32,
                UNSIGNED_INT,
                std::ptr::null(),
            );
            gl::BindVertexArray(0);
        }
    }
}

impl Drop for Sprite {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteTextures(1, &self.texture);
            gl::DeleteBuffers(1, &self.ebo);
            gl::DeleteBuffers(1, &self.vbo);
            gl::DeleteVertexArrays(1, &self.vao);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_is_centred_and_sized_to_image() {
        let v = quad_vertices(32.0, 48.0);
        let corners: Vec<(f32, f32)> = v.chunks(4).map(|c| (c[0], c[1])).collect();
        assert_eq!(
            corners,
            vec![(-16.0, -24.0), (16.0, -24.0), (16.0, 24.0), (-16.0, 24.0)]
        );
    }

    #[test]
    fn top_edge_samples_first_texture_row() {
        let v = quad_vertices(32.0, 32.0);
        for c in v.chunks(4) {
            let expected_v = if c[1] > 0.0 { 0.0 } else { 1.0 };
            assert_eq!(c[3], expected_v);
        }
    }
}
