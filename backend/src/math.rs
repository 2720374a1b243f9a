use std::mem;
use std::ops::{Index, IndexMut, Mul};

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline(always)]
    pub fn as_array(&self) -> &[f32; 4] {
        let ary: &[f32; 4] = unsafe { mem::transmute(self) };
        ary
    }
    #[inline(always)]
    pub fn as_array_mut(&mut self) -> &mut [f32; 4] {
        let ary: &mut [f32; 4] = unsafe { mem::transmute(self) };
        ary
    }
}

impl Index<usize> for Vec4 {
    type Output = f32;
    #[inline(always)]
    fn index(&self, i: usize) -> &f32 {
        self.as_array().index(i)
    }
}

impl IndexMut<usize> for Vec4 {
    #[inline(always)]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        self.as_array_mut().index_mut(i)
    }
}

/// Column-major 4x4 matrix, laid out the way `glUniformMatrix4fv` expects.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4x4 {
    pub c0: Vec4,
    pub c1: Vec4,
    pub c2: Vec4,
    pub c3: Vec4,
}

impl Mat4x4 {
    pub fn identity() -> Self {
        Self {
            c0: Vec4::new(1.0, 0.0, 0.0, 0.0),
            c1: Vec4::new(0.0, 1.0, 0.0, 0.0),
            c2: Vec4::new(0.0, 0.0, 1.0, 0.0),
            c3: Vec4::new(0.0, 0.0, 0.0, 1.0),
        }
    }

    /// Counter-clockwise rotation around the z axis, angle in radians.
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            c0: Vec4::new(c, s, 0.0, 0.0),
            c1: Vec4::new(-s, c, 0.0, 0.0),
            ..Self::identity()
        }
    }

    pub fn translation(x: f32, y: f32) -> Self {
        Self {
            c3: Vec4::new(x, y, 0.0, 1.0),
            ..Self::identity()
        }
    }

    /// Maps the rectangle [left, right] x [bottom, top] onto clip space.
    pub fn ortho(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        Self {
            c0: Vec4::new(2.0 / (right - left), 0.0, 0.0, 0.0),
            c1: Vec4::new(0.0, 2.0 / (top - bottom), 0.0, 0.0),
            c2: Vec4::new(0.0, 0.0, -1.0, 0.0),
            c3: Vec4::new(
                -(right + left) / (right - left),
                -(top + bottom) / (top - bottom),
                0.0,
                1.0,
            ),
        }
    }

    fn column(&self, i: usize) -> &Vec4 {
        match i {
            0 => &self.c0,
            1 => &self.c1,
            2 => &self.c2,
            _ => &self.c3,
        }
    }

    fn mul_vec4(&self, v: &Vec4) -> Vec4 {
        let mut out = Vec4::new(0.0, 0.0, 0.0, 0.0);
        for col in 0..4 {
            let c = self.column(col);
            for row in 0..4 {
                out[row] += c[row] * v[col];
            }
        }
        out
    }

    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        let v = self.mul_vec4(&Vec4::new(p.x, p.y, 0.0, 1.0));
        Vec2::new(v.x, v.y)
    }

    pub fn as_cols(&self) -> [f32; 16] {
        let mut arr = [0.0; 16];
        for col in 0..4 {
            arr[col * 4..col * 4 + 4].copy_from_slice(self.column(col).as_array());
        }
        arr
    }
}

impl Mul for Mat4x4 {
    type Output = Mat4x4;

    fn mul(self, rhs: Mat4x4) -> Mat4x4 {
        Mat4x4 {
            c0: self.mul_vec4(&rhs.c0),
            c1: self.mul_vec4(&rhs.c1),
            c2: self.mul_vec4(&rhs.c2),
            c3: self.mul_vec4(&rhs.c3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::FRAC_PI_2;

    fn assert_point(p: Vec2, x: f32, y: f32) {
        assert_abs_diff_eq!(p.x, x, epsilon = 1e-5);
        assert_abs_diff_eq!(p.y, y, epsilon = 1e-5);
    }

    #[test]
    fn zero_rotation_is_identity() {
        assert_eq!(Mat4x4::rotation_z(0.0), Mat4x4::identity());
    }

    #[test]
    fn quarter_turn_is_counter_clockwise() {
        let m = Mat4x4::rotation_z(FRAC_PI_2);
        assert_point(m.transform_point(Vec2::new(1.0, 0.0)), 0.0, 1.0);
    }

    #[test]
    fn rotate_then_translate() {
        let m = Mat4x4::translation(300.0, 300.0) * Mat4x4::rotation_z(FRAC_PI_2);
        assert_point(m.transform_point(Vec2::new(10.0, 0.0)), 300.0, 310.0);
    }

    #[test]
    fn ortho_maps_window_corners() {
        let p = Mat4x4::ortho(0.0, 600.0, 0.0, 600.0);
        assert_point(p.transform_point(Vec2::new(0.0, 0.0)), -1.0, -1.0);
        assert_point(p.transform_point(Vec2::new(300.0, 300.0)), 0.0, 0.0);
        assert_point(p.transform_point(Vec2::new(600.0, 600.0)), 1.0, 1.0);
    }

    #[test]
    fn columns_flatten_in_order() {
        let arr = Mat4x4::translation(5.0, 7.0).as_cols();
        assert_eq!(&arr[12..16], &[5.0, 7.0, 0.0, 1.0]);
        assert_eq!(arr[0], 1.0);
    }
}
