use crate::error::Error;
use splash_image::SPLASH_LEN;
use std::{convert::TryFrom, fmt, path::Path, str::FromStr};

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum InputFormat {
    /// Flat dump of 16-bit samples
    Raw,
    /// C array initializer, as exported by TFT_eSPI's ImageConverter
    Header,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("h") | Some("hpp") | Some("c") => InputFormat::Header,
            _ => InputFormat::Raw,
        }
    }
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "raw" | "bin" => Ok(InputFormat::Raw),
            "header" | "h" => Ok(InputFormat::Header),
            _ => Err(format!("Unknown input format '{}', expected raw or header", s)),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InputFormat::Raw => "raw",
            InputFormat::Header => "header",
        };
        write!(f, "{}", s)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ByteOrder {
    Big,
    Little,
}

pub fn read_raw(bytes: &[u8], order: ByteOrder) -> Result<Vec<u16>, Error> {
    if bytes.len() % 2 != 0 {
        return Err(Error::OddLength(bytes.len()));
    }
    Ok(bytes
        .chunks_exact(2)
        .map(|b| {
            let pair = [b[0], b[1]];
            match order {
                ByteOrder::Big => u16::from_be_bytes(pair),
                ByteOrder::Little => u16::from_le_bytes(pair),
            }
        })
        .collect())
}

/// Parses the initializer list of the first `= { ... }` in a C source file.
///
/// Integer literals may be decimal, octal (leading `0`), hex or binary, with
/// optional `u`/`l` suffixes. A lone `{0}` follows C aggregate initialization
/// and yields a zeroed full-size buffer.
pub fn read_header(text: &str) -> Result<Vec<u16>, Error> {
    let text = blank_comments_and_literals(text);
    let open = find_initializer(&text).ok_or(Error::MissingArray)?;
    let close = text[open..]
        .find('}')
        .map(|i| open + i)
        .ok_or(Error::MissingArray)?;

    let mut tokens: Vec<&str> = text[open + 1..close].split(',').map(str::trim).collect();
    // trailing comma
    if tokens.len() > 1 && tokens.last() == Some(&"") {
        tokens.pop();
    }

    let samples = tokens
        .into_iter()
        .map(parse_literal)
        .collect::<Result<Vec<u16>, Error>>()?;

    if samples == [0_u16] {
        return Ok(vec![0; SPLASH_LEN]);
    }
    Ok(samples)
}

/// Byte offset of the `{` opening the first `= {` initializer
fn find_initializer(text: &str) -> Option<usize> {
    text.match_indices('=').find_map(|(eq, _)| {
        let rest = &text[eq + 1..];
        let trimmed = rest.trim_start();
        if trimmed.starts_with('{') {
            Some(eq + 1 + rest.len() - trimmed.len())
        } else {
            None
        }
    })
}

fn parse_literal(token: &str) -> Result<u16, Error> {
    let bad = || Error::BadLiteral(token.to_string());
    let digits = token.trim_end_matches(|c: char| matches!(c, 'u' | 'U' | 'l' | 'L'));

    let (radix, body) = if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        (16, hex)
    } else if let Some(bin) = digits
        .strip_prefix("0b")
        .or_else(|| digits.strip_prefix("0B"))
    {
        (2, bin)
    } else if digits.len() > 1 && digits.starts_with('0') {
        (8, &digits[1..])
    } else {
        (10, digits)
    };

    // from_str_radix alone would accept a sign
    if body.is_empty() || !body.chars().all(|c| c.is_digit(radix)) {
        return Err(bad());
    }
    let value = u32::from_str_radix(body, radix).map_err(|_| bad())?;
    u16::try_from(value).map_err(|_| bad())
}

/// Replaces comments with whitespace and empties string and character
/// literals, keeping their quotes, so neither can contribute braces,
/// commas or comment markers.
fn blank_comments_and_literals(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '/' if chars.peek() == Some(&'/') => {
                for c in chars.by_ref() {
                    if c == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for c in chars.by_ref() {
                    if prev == '*' && c == '/' {
                        break;
                    }
                    prev = c;
                }
                out.push(' ');
            }
            '"' | '\'' => {
                out.push(c);
                let mut escaped = false;
                for inner in chars.by_ref() {
                    if escaped {
                        escaped = false;
                    } else if inner == '\\' {
                        escaped = true;
                    } else if inner == c || inner == '\n' {
                        out.push(inner);
                        break;
                    }
                }
            }
            _ => out.push(c),
        }
    }
    out
}
