//! Splash screen bitmap for a 320x240 RGB565 TFT display.
//!
//! The samples live in a `static` table, so on the target they stay in flash
//! and are never copied to RAM. `src/splash_image.rs` is generated by
//! `host-tools/splash-gen` from the output of an external image converter.

#![cfg_attr(not(test), no_std)]

pub use embedded_graphics;

pub use crate::display::{PixelFormat, SIZE, SPLASH_HEIGHT, SPLASH_LEN, SPLASH_WIDTH};
pub use crate::splash::{Error, Splash, SPLASH};
pub use crate::splash_image::SPLASH_IMAGE;

pub mod display;
mod splash;
mod splash_image;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dimensions_match_buffer_length() {
        assert_eq!(SPLASH_WIDTH, 320);
        assert_eq!(SPLASH_HEIGHT, 240);
        assert_eq!(
            usize::from(SPLASH_WIDTH) * usize::from(SPLASH_HEIGHT),
            SPLASH_IMAGE.len()
        );
        assert_eq!(SPLASH_IMAGE.len(), 76_800);
        assert_eq!(SPLASH_LEN, 76_800);
        assert_eq!(SIZE.width, u32::from(SPLASH_WIDTH));
        assert_eq!(SIZE.height, u32::from(SPLASH_HEIGHT));
    }

    #[test]
    fn placeholder_is_all_zero() {
        assert!(SPLASH_IMAGE.iter().all(|&s| s == 0));
    }

    #[test]
    fn indexing_bounds() {
        assert!(SPLASH_IMAGE.get(76_799).is_some());
        assert!(SPLASH_IMAGE.get(76_800).is_none());
    }
}
