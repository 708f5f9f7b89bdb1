//! Seven-segment digit layout
//!
//! Score labels are only ever digits, so text is drawn as rectangles
//! instead of going through a font rasteriser.

/// Rectangle in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

// Segment bits: a=top, b=upper right, c=lower right, d=bottom,
// e=lower left, f=upper left, g=middle
const A: u8 = 1 << 0;
const B: u8 = 1 << 1;
const C: u8 = 1 << 2;
const D: u8 = 1 << 3;
const E: u8 = 1 << 4;
const F: u8 = 1 << 5;
const G: u8 = 1 << 6;

const DIGITS: [u8; 10] = [
    A | B | C | D | E | F,     // 0
    B | C,                     // 1
    A | B | D | E | G,         // 2
    A | B | C | D | G,         // 3
    B | C | F | G,             // 4
    A | C | D | F | G,         // 5
    A | C | D | E | F | G,     // 6
    A | B | C,                 // 7
    A | B | C | D | E | F | G, // 8
    A | B | C | D | F | G,     // 9
];

/// Glyph metrics for a font size in pixels
#[derive(Debug, Clone, Copy)]
pub struct Metrics {
    pub height: f32,
    pub width: f32,
    pub stroke: f32,
    pub advance: f32,
}

impl Metrics {
    pub fn for_size(size: f32) -> Self {
        // Roughly the cap height and digit width of a sans-serif face
        let height = size * 0.72;
        let width = height * 0.55;
        let stroke = (height * 0.12).max(1.0);
        Self {
            height,
            width,
            stroke,
            advance: width + stroke * 1.5,
        }
    }
}

/// Lay out `text` with its baseline starting at `(x, baseline)`.
///
/// Characters other than ASCII digits take up a blank cell.
pub fn layout(text: &str, x: f32, baseline: f32, size: f32) -> Vec<Segment> {
    let m = Metrics::for_size(size);
    let top = baseline - m.height;
    let mut out = Vec::new();

    for (i, ch) in text.chars().enumerate() {
        let Some(digit) = ch.to_digit(10) else {
            continue;
        };
        let left = x + i as f32 * m.advance;
        push_digit(&mut out, DIGITS[digit as usize], left, top, &m);
    }
    out
}

fn push_digit(out: &mut Vec<Segment>, mask: u8, x: f32, top: f32, m: &Metrics) {
    let t = m.stroke;
    let half = m.height / 2.0;
    let mid = top + half - t / 2.0;
    let right = x + m.width - t;
    let column = half + t / 2.0;

    let rect = |x, y, width, height| Segment {
        x,
        y,
        width,
        height,
    };
    let parts = [
        (A, rect(x, top, m.width, t)),
        (B, rect(right, top, t, column)),
        (C, rect(right, mid, t, column)),
        (D, rect(x, top + m.height - t, m.width, t)),
        (E, rect(x, mid, t, column)),
        (F, rect(x, top, t, column)),
        (G, rect(x, mid, m.width, t)),
    ];

    out.extend(
        parts
            .into_iter()
            .filter(|(bit, _)| mask & bit != 0)
            .map(|(_, seg)| seg),
    );
}
