//! Integer to ASCII digits without `core::fmt`.
//!
//! The report feeds these bytes through `Writer::put_char` one at a time.

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// The 8 uppercase hex digits of `value`, most significant nibble first.
pub fn hex32(value: u32) -> [u8; 8] {
    let mut digits = [0; 8];
    for (index, digit) in digits.iter_mut().enumerate() {
        let shift = 28 - 4 * index as u32;
        *digit = HEX_DIGITS[((value >> shift) & 0xF) as usize];
    }
    digits
}

/// Decimal digits of a `u32`, most significant first. Zero is `"0"`.
#[derive(Debug, Clone, Copy)]
pub struct Decimal {
    // u32::MAX has 10 digits
    digits: [u8; 10],
    start: usize,
}

impl Decimal {
    pub fn new(mut value: u32) -> Self {
        let mut digits = [b'0'; 10];
        let mut start = digits.len();
        loop {
            start -= 1;
            digits[start] = b'0' + (value % 10) as u8;
            value /= 10;
            if value == 0 {
                break;
            }
        }
        Self { digits, start }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.digits[self.start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn hex_is_fixed_width_uppercase() {
        assert_eq!(&hex32(0x2BADB002), b"2BADB002");
        assert_eq!(&hex32(0), b"00000000");
        assert_eq!(&hex32(0xABCDEF), b"00ABCDEF");
        assert_eq!(&hex32(u32::MAX), b"FFFFFFFF");
    }

    #[test]
    fn decimal_edges() {
        assert_eq!(Decimal::new(0).as_bytes(), b"0");
        assert_eq!(Decimal::new(7).as_bytes(), b"7");
        assert_eq!(Decimal::new(640).as_bytes(), b"640");
        assert_eq!(Decimal::new(1000).as_bytes(), b"1000");
        assert_eq!(Decimal::new(u32::MAX).as_bytes(), b"4294967295");
    }

    proptest! {
        #[test]
        fn decimal_matches_display(value in any::<u32>()) {
            let digits = Decimal::new(value);
            let expected = value.to_string();
            prop_assert_eq!(digits.as_bytes(), expected.as_bytes());
        }

        #[test]
        fn hex_matches_display(value in any::<u32>()) {
            let digits = hex32(value);
            let expected = format!("{value:08X}");
            prop_assert_eq!(&digits[..], expected.as_bytes());
        }
    }
}
