use embedded_graphics::{geometry::Size, pixelcolor::Rgb565};

pub const SPLASH_WIDTH: u16 = 320;
pub const SPLASH_HEIGHT: u16 = 240;
pub const SPLASH_LEN: usize = SPLASH_WIDTH as usize * SPLASH_HEIGHT as usize;
pub const SIZE: Size = Size::new(SPLASH_WIDTH as u32, SPLASH_HEIGHT as u32);

/// 5 bits red, 6 bits green, 5 bits blue, red in the most significant bits
pub type PixelFormat = Rgb565;
