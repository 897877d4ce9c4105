use serde::{Deserialize, Serialize};

use crate::Millis;

/// 8-bit RGB triple.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Smoothstep blend from `from` towards `to` over `duration` milliseconds.
///
/// Returns `from` exactly at `elapsed = 0` and `to` exactly once `elapsed`
/// reaches `duration`. Each channel moves monotonically in between.
pub fn blend(from: Rgb, to: Rgb, elapsed: Millis, duration: Millis) -> Rgb {
    if elapsed >= duration {
        return to;
    }

    let t = elapsed as f32 / duration as f32;
    let v = t * t * (3.0 - 2.0 * t);

    Rgb(
        channel(from.0, to.0, v),
        channel(from.1, to.1, v),
        channel(from.2, to.2, v),
    )
}

fn channel(a: u8, b: u8, v: f32) -> u8 {
    (f32::from(a) + v * (f32::from(b) - f32::from(a))).round() as u8
}
