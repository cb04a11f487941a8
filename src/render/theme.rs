use crate::memory::UnitState;
use image::Rgb;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Rgb<u8>, // Canvas and padding cells
    pub used: Rgb<u8>,       // Dark blue
    pub free: Rgb<u8>,       // Green
    pub invalid: Rgb<u8>,    // Red
    pub text: Rgb<u8>,
}

pub const DEFAULT_THEME: Theme = Theme {
    background: Rgb([190, 190, 190]),
    used: Rgb([25, 25, 127]),
    free: Rgb([24, 190, 24]),
    invalid: Rgb([255, 0, 0]),
    text: Rgb([0, 0, 0]),
};

impl Theme {
    pub fn cell_color(&self, state: UnitState) -> Rgb<u8> {
        match state {
            UnitState::Free => self.free,
            UnitState::Used => self.used,
            UnitState::Invalid => self.invalid,
            UnitState::Padding => self.background,
        }
    }

    /// Every colour a rendered frame can contain, background first
    pub fn palette(&self) -> Vec<Rgb<u8>> {
        vec![
            self.background,
            self.used,
            self.free,
            self.invalid,
            self.text,
        ]
    }
}

impl Default for Theme {
    fn default() -> Self {
        DEFAULT_THEME
    }
}
