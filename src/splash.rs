use crate::display::{PixelFormat, SIZE, SPLASH_LEN, SPLASH_WIDTH};
use crate::splash_image::SPLASH_IMAGE;
use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{Dimensions, OriginDimensions, Point, Size},
    image::ImageDrawable,
    pixelcolor::raw::RawU16,
    primitives::{PointsIter, Rectangle},
};

/// The splash screen compiled into the firmware image
pub static SPLASH: Splash<'static> = Splash::from_array(&SPLASH_IMAGE);

#[derive(Debug, err_derive::Error)]
pub enum Error {
    #[error(
        display = "Expected {} RGB565 samples, got {}",
        expected,
        actual
    )]
    LengthMismatch { expected: usize, actual: usize },
}

/// Read-only, row-major view over exactly `SPLASH_LEN` RGB565 samples
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Splash<'a> {
    data: &'a [u16],
}

impl<'a> Splash<'a> {
    pub const fn from_array(data: &'a [u16; SPLASH_LEN]) -> Self {
        Splash { data }
    }

    pub fn new(data: &'a [u16]) -> Result<Self, Error> {
        if data.len() != SPLASH_LEN {
            return Err(Error::LengthMismatch {
                expected: SPLASH_LEN,
                actual: data.len(),
            });
        }
        Ok(Splash { data })
    }

    pub fn raw(&self) -> &'a [u16] {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw sample at a linear row-major index
    pub fn get(&self, index: usize) -> Option<u16> {
        self.data.get(index).copied()
    }

    pub fn pixel(&self, p: Point) -> Option<PixelFormat> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        let (x, y) = (p.x as u32, p.y as u32);
        if x >= SIZE.width || y >= SIZE.height {
            return None;
        }
        self.get(y as usize * usize::from(SPLASH_WIDTH) + x as usize)
            .map(to_color)
    }

    pub fn colors(&self) -> impl Iterator<Item = PixelFormat> + 'a {
        self.data.iter().copied().map(to_color)
    }

    /// True while the buffer still holds the all-zero placeholder
    pub fn is_placeholder(&self) -> bool {
        self.data.iter().all(|&s| s == 0)
    }
}

fn to_color(sample: u16) -> PixelFormat {
    PixelFormat::from(RawU16::new(sample))
}

impl OriginDimensions for Splash<'_> {
    fn size(&self) -> Size {
        SIZE
    }
}

impl ImageDrawable for Splash<'_> {
    type Color = PixelFormat;

    fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        target.fill_contiguous(&self.bounding_box(), self.colors())
    }

    fn draw_sub_image<D>(&self, target: &mut D, area: &Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let clipped = area.intersection(&self.bounding_box());
        if clipped.size.width == 0 || clipped.size.height == 0 {
            return Ok(());
        }

        // The sub image's own origin is area.top_left
        let dest = Rectangle::new(clipped.top_left - area.top_left, clipped.size);
        let colors = clipped.points().filter_map(|p| self.pixel(p));
        target.fill_contiguous(&dest, colors)
    }
}
