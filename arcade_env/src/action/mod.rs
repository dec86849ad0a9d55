mod catalog;

pub use catalog::ActionCatalog;

use bitflags::bitflags;

bitflags! {
    /// Inputs held on the joystick while an action is applied.
    pub struct JoystickState: u8 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        const FIRE = 1 << 4;
    }
}

/// One of the 18 inputs of the single-button joystick, in the canonical
/// order engines report them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Action {
    Noop = 0,
    Fire = 1,
    Up = 2,
    Right = 3,
    Left = 4,
    Down = 5,
    UpRight = 6,
    UpLeft = 7,
    DownRight = 8,
    DownLeft = 9,
    UpFire = 10,
    RightFire = 11,
    LeftFire = 12,
    DownFire = 13,
    UpRightFire = 14,
    UpLeftFire = 15,
    DownRightFire = 16,
    DownLeftFire = 17,
}

impl Action {
    pub const COUNT: usize = 18;

    pub const ALL: [Action; Action::COUNT] = [
        Action::Noop,
        Action::Fire,
        Action::Up,
        Action::Right,
        Action::Left,
        Action::Down,
        Action::UpRight,
        Action::UpLeft,
        Action::DownRight,
        Action::DownLeft,
        Action::UpFire,
        Action::RightFire,
        Action::LeftFire,
        Action::DownFire,
        Action::UpRightFire,
        Action::UpLeftFire,
        Action::DownRightFire,
        Action::DownLeftFire,
    ];

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    pub fn joystick(self) -> JoystickState {
        match self {
            Action::Noop => JoystickState::empty(),
            Action::Fire => JoystickState::FIRE,
            Action::Up => JoystickState::UP,
            Action::Right => JoystickState::RIGHT,
            Action::Left => JoystickState::LEFT,
            Action::Down => JoystickState::DOWN,
            Action::UpRight => JoystickState::UP | JoystickState::RIGHT,
            Action::UpLeft => JoystickState::UP | JoystickState::LEFT,
            Action::DownRight => JoystickState::DOWN | JoystickState::RIGHT,
            Action::DownLeft => JoystickState::DOWN | JoystickState::LEFT,
            Action::UpFire => JoystickState::UP | JoystickState::FIRE,
            Action::RightFire => JoystickState::RIGHT | JoystickState::FIRE,
            Action::LeftFire => JoystickState::LEFT | JoystickState::FIRE,
            Action::DownFire => JoystickState::DOWN | JoystickState::FIRE,
            Action::UpRightFire => JoystickState::UP | JoystickState::RIGHT | JoystickState::FIRE,
            Action::UpLeftFire => JoystickState::UP | JoystickState::LEFT | JoystickState::FIRE,
            Action::DownRightFire => {
                JoystickState::DOWN | JoystickState::RIGHT | JoystickState::FIRE
            }
            Action::DownLeftFire => JoystickState::DOWN | JoystickState::LEFT | JoystickState::FIRE,
        }
    }
}

impl JoystickState {
    /// the action holding exactly these inputs, `None` for impossible
    /// combinations like up and down together
    pub fn action(self) -> Option<Action> {
        Action::ALL.iter().copied().find(|a| a.joystick() == self)
    }
}
