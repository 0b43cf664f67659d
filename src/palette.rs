//! Player colors spread across a blue-to-red rainbow.

use std::f64::consts::PI;

/// Rainbow color map channels for `x` in `[0, 1]`.
fn rainbow(x: f64) -> [f64; 3] {
    let r = (2.0 * x - 0.5).abs();
    let g = (PI * x).sin();
    let b = (PI * x / 2.0).cos();
    [r, g, b].map(|c| c.clamp(0.0, 1.0))
}

fn to_hex([r, g, b]: [f64; 3]) -> String {
    let byte = |c: f64| (c * 255.0).round() as u8;
    format!("#{:02x}{:02x}{:02x}", byte(r), byte(g), byte(b))
}

/// `n` colors as `#rrggbb`, evenly spaced from blue-violet to red.
pub fn rainbow_hex_colors(n: usize) -> Vec<String> {
    match n {
        0 => Vec::new(),
        1 => vec![to_hex(rainbow(0.0))],
        _ => (0..n)
            .map(|i| to_hex(rainbow(i as f64 / (n - 1) as f64)))
            .collect(),
    }
}
