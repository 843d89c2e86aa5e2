/// 8-bit RGB pixel as written to an LED strip.
///
/// `repr(C)` and `Pod` so a channel buffer can be handed to a transport as raw
/// bytes with [`bytemuck::cast_slice`].
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack `0xRRGGBB`. Bits above 24 are ignored.
    pub const fn from_packed(rgb: u32) -> Self {
        Self {
            r: (rgb >> 16) as u8,
            g: (rgb >> 8) as u8,
            b: rgb as u8,
        }
    }

    pub const fn packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

impl From<u32> for Rgb {
    fn from(rgb: u32) -> Self {
        Rgb::from_packed(rgb)
    }
}

impl From<Rgb> for u32 {
    fn from(c: Rgb) -> Self {
        c.packed()
    }
}
