use super::{HexColorError, Rgb};

/// A parsed hexadecimal color, keeping the alpha byte of `#RRGGBBAA` input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    /// The color channels.
    pub rgb: Rgb,
    /// Alpha byte, present only for 8-digit input.
    pub alpha: Option<u8>,
}

const fn hex_digit(b: u8, index: usize) -> Result<u8, HexColorError> {
    match b {
        b'0'..=b'9' => Ok(b - b'0'),
        b'a'..=b'f' => Ok(b - b'a' + 10),
        b'A'..=b'F' => Ok(b - b'A' + 10),
        _ => Err(HexColorError::InvalidDigit(index)),
    }
}

fn hex_byte(bytes: &[u8], index: usize) -> Result<u8, HexColorError> {
    let hi = hex_digit(bytes[index], index)?;
    let lo = hex_digit(bytes[index + 1], index + 1)?;
    Ok((hi << 4) | lo)
}

// `#f0a` -> 0xff, 0x00, 0xaa
fn short_hex_byte(bytes: &[u8], index: usize) -> Result<u8, HexColorError> {
    let digit = hex_digit(bytes[index], index)?;
    Ok((digit << 4) | digit)
}

/// Parses a hexadecimal color, keeping the alpha byte when present.
///
/// A single leading `#` is optional. The body must be 3, 6 or 8 hex digits;
/// digits are case-insensitive.
///
/// # Errors
///
/// Returns [`HexColorError::InvalidLength`] with the body length when it is not
/// 3, 6 or 8, and [`HexColorError::InvalidDigit`] with the byte index (in the
/// original string) of the first non-hexadecimal character.
pub fn parse_hex_color(s: &str) -> Result<HexColor, HexColorError> {
    let bytes = s.as_bytes();
    let offset = usize::from(bytes.first() == Some(&b'#'));

    match bytes.len() - offset {
        3 => Ok(HexColor {
            rgb: Rgb::new(
                short_hex_byte(bytes, offset)?,
                short_hex_byte(bytes, offset + 1)?,
                short_hex_byte(bytes, offset + 2)?,
            ),
            alpha: None,
        }),
        6 => Ok(HexColor {
            rgb: Rgb::new(
                hex_byte(bytes, offset)?,
                hex_byte(bytes, offset + 2)?,
                hex_byte(bytes, offset + 4)?,
            ),
            alpha: None,
        }),
        8 => Ok(HexColor {
            rgb: Rgb::new(
                hex_byte(bytes, offset)?,
                hex_byte(bytes, offset + 2)?,
                hex_byte(bytes, offset + 4)?,
            ),
            alpha: Some(hex_byte(bytes, offset + 6)?),
        }),
        len => Err(HexColorError::InvalidLength(len)),
    }
}

/// Strict check for user-typed colors.
///
/// Requires a leading `#` followed by exactly 3, 6 or 8 characters from
/// `[0-9a-fA-F]`. Everything accepted here is also accepted by
/// [`parse_hex_color`] and [`Rgb::from_hex`].
#[must_use]
pub fn is_valid_hex_color(input: &str) -> bool {
    input.strip_prefix('#').is_some_and(|body| {
        matches!(body.len(), 3 | 6 | 8) && body.bytes().all(|b| b.is_ascii_hexdigit())
    })
}
