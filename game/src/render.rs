use crate::input::Controls;
use crate::ship::Ship;
use backend::math::Mat4x4;
use backend::shaders::Shaders;
use backend::sprite::{sprite_shaders, Sprite};
use resources::decode::Image;
use resources::sprite_set::SpriteSet;
use std::f64::consts::FRAC_PI_2;
use tracing::debug;

/// Sprites are drawn nose-up, which is already a heading of pi/2.
pub fn sprite_rotation(heading: f64) -> f64 {
    heading - FRAC_PI_2
}

/// Rotate by the heading, then move to window centre plus ship position.
pub fn model_matrix(ship: &Ship, center: (f32, f32)) -> Mat4x4 {
    let rotate = Mat4x4::rotation_z(sprite_rotation(ship.heading) as f32);
    let translate = Mat4x4::translation(
        center.0 + ship.position.x as f32,
        center.1 + ship.position.y as f32,
    );
    translate * rotate
}

pub struct Scene {
    shaders: Shaders,
    projection: Mat4x4,
    ship: Sprite,
    burn: Sprite,
    left: Sprite,
    right: Sprite,
}

impl Scene {
    pub fn new(sprites: &SpriteSet, width: usize, height: usize) -> Result<Scene, String> {
        let upload = |name: &str, img: &Image| {
            let sprite = Sprite::new(img.width, img.height, &img.data)?;
            debug!(sprite = name, width = sprite.width, height = sprite.height, "uploaded sprite");
            Ok::<_, String>(sprite)
        };

        Ok(Scene {
            shaders: sprite_shaders()?,
            projection: Mat4x4::ortho(0.0, width as f32, 0.0, height as f32),
            ship: upload("ship", &sprites.ship)?,
            burn: upload("burn", &sprites.burn)?,
            left: upload("left", &sprites.left)?,
            right: upload("right", &sprites.right)?,
        })
    }

    pub fn draw(&self, ship: &Ship, controls: &Controls, center: (f32, f32)) {
        let model = model_matrix(ship, center);

        self.shaders.use_program();
        self.shaders.set_mat4fv(c"projection", &self.projection);

        self.ship.draw(&self.shaders, &model);
        if controls.thrust {
            self.burn.draw(&self.shaders, &model);
        }
        if controls.left {
            self.left.draw(&self.shaders, &model);
        }
        if controls.right {
            self.right.draw(&self.shaders, &model);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ship::Vec2d;
    use crate::tuning::ShipTuning;
    use approx::assert_abs_diff_eq;
    use backend::math::Vec2;
    use std::f64::consts::PI;

    #[test]
    fn upright_ship_needs_no_rotation() {
        assert_eq!(sprite_rotation(FRAC_PI_2), 0.0);
        assert_abs_diff_eq!(sprite_rotation(PI), FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn sprite_centre_lands_on_window_centre_plus_position() {
        let mut ship = Ship::new(&ShipTuning::default());
        ship.position = Vec2d::new(12.0, -30.0);
        let p = model_matrix(&ship, (300.0, 300.0)).transform_point(Vec2::new(0.0, 0.0));

        assert_abs_diff_eq!(p.x, 312.0, epsilon = 1e-4);
        assert_abs_diff_eq!(p.y, 270.0, epsilon = 1e-4);
    }

    #[test]
    fn nose_follows_heading() {
        let mut ship = Ship::new(&ShipTuning::default());

        // upright: the nose (top of the sprite) stays on top
        let nose = model_matrix(&ship, (300.0, 300.0)).transform_point(Vec2::new(0.0, 16.0));
        assert_abs_diff_eq!(nose.x, 300.0, epsilon = 1e-4);
        assert_abs_diff_eq!(nose.y, 316.0, epsilon = 1e-4);

        // heading 0 points along +x
        ship.heading = 0.0;
        let nose = model_matrix(&ship, (300.0, 300.0)).transform_point(Vec2::new(0.0, 16.0));
        assert_abs_diff_eq!(nose.x, 316.0, epsilon = 1e-4);
        assert_abs_diff_eq!(nose.y, 300.0, epsilon = 1e-4);
    }
}
