use crate::ship::ShipCommand;
use backend::system::{Scancode, System};

pub const TURN_LEFT_KEY: Scancode = Scancode::Left;
pub const TURN_RIGHT_KEY: Scancode = Scancode::Right;
pub const THRUST_KEY: Scancode = Scancode::Up;

/// Keys held during the current frame. Drives both the ship commands and
/// which overlay sprites get drawn.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub thrust: bool,
}

impl Controls {
    pub fn read(system: &System) -> Controls {
        Controls {
            left: system.is_pressed(TURN_LEFT_KEY),
            right: system.is_pressed(TURN_RIGHT_KEY),
            thrust: system.is_pressed(THRUST_KEY),
        }
    }

    /// Commands for this frame, in left, right, thrust order. Holding both
    /// turn keys fires both and they cancel out.
    pub fn commands(&self) -> impl Iterator<Item = ShipCommand> {
        [
            (self.left, ShipCommand::TurnLeft),
            (self.right, ShipCommand::TurnRight),
            (self.thrust, ShipCommand::Burn),
        ]
        .into_iter()
        .filter_map(|(held, cmd)| held.then_some(cmd))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_controls_send_nothing() {
        assert_eq!(Controls::default().commands().count(), 0);
    }

    #[test]
    fn held_keys_map_to_commands_in_order() {
        let controls = Controls {
            left: true,
            right: true,
            thrust: true,
        };
        let cmds: Vec<_> = controls.commands().collect();
        assert_eq!(
            cmds,
            vec![
                ShipCommand::TurnLeft,
                ShipCommand::TurnRight,
                ShipCommand::Burn
            ]
        );
    }

    #[test]
    fn thrust_alone() {
        let controls = Controls {
            thrust: true,
            ..Default::default()
        };
        assert_eq!(controls.commands().collect::<Vec<_>>(), vec![ShipCommand::Burn]);
    }
}
