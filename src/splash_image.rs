// Regenerate with host-tools/splash-gen
use crate::display::SPLASH_LEN;

pub static SPLASH_IMAGE: [u16; SPLASH_LEN] = [0; SPLASH_LEN];
