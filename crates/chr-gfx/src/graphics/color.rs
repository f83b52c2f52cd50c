pub const RGB888_SIZE: usize = std::mem::size_of::<Rgb888>();

// -------------------------------------------------------------------------------------------------

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Rgb888 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

// -------------------------------------------------------------------------------------------------

#[rustfmt::skip]
impl Rgb888 {
    pub const BLACK: Rgb888 = Rgb888::new(0x00, 0x00, 0x00);
    pub const WHITE: Rgb888 = Rgb888::new(0xFF, 0xFF, 0xFF);
    pub const RED:   Rgb888 = Rgb888::new(0xFF, 0x00, 0x00);
    pub const GREEN: Rgb888 = Rgb888::new(0x00, 0xFF, 0x00);
    pub const BLUE:  Rgb888 = Rgb888::new(0x00, 0x00, 0xFF);
}

impl Rgb888 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn to_array(self) -> [u8; RGB888_SIZE] {
        [self.r, self.g, self.b]
    }
}
