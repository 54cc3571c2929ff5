use itertools::Itertools;
use splash_image::Splash;

const SAMPLES_PER_LINE: usize = 16;

const PREAMBLE: &str = "// Regenerate with host-tools/splash-gen
use crate::display::SPLASH_LEN;

";

/// Rust source for `src/splash_image.rs`.
///
/// Only the sample count `SPLASH_LEN` is referenced, the dimensions stay
/// defined in `display.rs`.
pub fn render(splash: &Splash<'_>) -> String {
    let mut src = String::from(PREAMBLE);

    if splash.is_placeholder() {
        src.push_str("pub static SPLASH_IMAGE: [u16; SPLASH_LEN] = [0; SPLASH_LEN];\n");
        return src;
    }

    src.push_str("pub static SPLASH_IMAGE: [u16; SPLASH_LEN] = [\n");
    for mut line in &splash
        .raw()
        .iter()
        .map(|s| format!("0x{:04X}", s))
        .chunks(SAMPLES_PER_LINE)
    {
        src.push_str("    ");
        src.push_str(&line.join(", "));
        src.push_str(",\n");
    }
    src.push_str("];\n");
    src
}
