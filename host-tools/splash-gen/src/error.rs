use std::io;

#[derive(Debug, err_derive::Error)]
pub enum Error {
    #[error(display = "I/O error: {}", _0)]
    Io(#[error(source)] io::Error),

    #[error(display = "Raw input has an odd number of bytes ({})", _0)]
    OddLength(usize),

    #[error(display = "No array initializer found in header")]
    MissingArray,

    #[error(display = "Invalid 16-bit literal '{}'", _0)]
    BadLiteral(String),

    #[error(display = "Image does not match the splash dimensions: {}", _0)]
    Splash(#[error(source)] splash_image::Error),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn wrapped_errors_convert() {
        let e = Error::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(matches!(e, Error::Io(_)));
        assert_eq!(e.to_string(), "I/O error: gone");

        let e = Error::from(splash_image::Error::LengthMismatch {
            expected: 2,
            actual: 1,
        });
        assert!(matches!(e, Error::Splash(_)));
    }
}
