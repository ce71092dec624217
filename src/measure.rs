//! Text measurement hooks for the two-pass layout.
//!
//! Label placement depends on rendered text extents (the value label's width
//! offsets the whole symbol row), and text extents are not known
//! analytically. The draw engine therefore measures through [`TextMeasurer`]:
//! hosts with a real text backend (canvas `getBBox`, shaping) plug their own
//! in, and [`CharWidthMeasurer`] provides a deterministic default good enough
//! for layout.

/// Width measurement for a single line of label text.
pub trait TextMeasurer {
    /// Width of `text` rendered at `font_size`, in viewbox units.
    fn measure(&self, text: &str, font_size: f64) -> f64;
}

/// Proportional per-character advances for ASCII `0x20..=0x7E`, in hundredths
/// of the base advance. Digits are 91, a wide `W` is 150, a thin `i` is 47.
#[rustfmt::skip]
const CHAR_ADVANCE: [u8; 95] = [
    45,  55,  62, 115,  90, 132, 125,  40,
    55,  55,  71, 115,  45,  48,  45,  50,
    91,  91,  91,  91,  91,  91,  91,  91,
    91,  91,  50,  50, 120, 120, 120,  78,
   142, 102, 105, 110, 115, 105,  98, 105,
   125,  58,  58, 107,  95, 145, 125, 115,
    95, 115, 107,  95,  97, 118, 102, 150,
   100,  93, 100,  58,  50,  58, 119,  72,
    72,  86,  92,  80,  92,  85,  52,  92,
    92,  47,  47,  88,  48, 135,  92,  86,
    92,  92,  69,  75,  58,  92,  80, 121,
    81,  80,  76,  91,  49,  91, 118,
];

/// Advance for characters outside the table (currency glyphs, CJK, ...).
const FALLBACK_ADVANCE: u32 = 100;

/// Base advance (one full table unit) as a fraction of the font size.
const ADVANCE_EM: f64 = 0.57;

/// Deterministic measurer backed by a proportional advance table.
///
/// Not metrically exact for any particular font, but stable across platforms,
/// which keeps rendering reproducible in tests and headless hosts.
#[derive(Clone, Copy, Debug, Default)]
pub struct CharWidthMeasurer;

impl TextMeasurer for CharWidthMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> f64 {
        let hundredths: u32 = text
            .chars()
            .map(|c| {
                if (' '..='~').contains(&c) {
                    CHAR_ADVANCE[(c as usize) - 0x20] as u32
                } else {
                    FALLBACK_ADVANCE
                }
            })
            .sum();
        hundredths as f64 * 0.01 * ADVANCE_EM * font_size
    }
}
