use serde::Serialize;

/// Hue span (degrees) shared out between the colored series.
const HUE_SPAN: f64 = 260.0;
/// Offset applied before deciding which side of the skipped band a hue falls on.
const HUE_OFFSET: f64 = 20.0;
/// Ramp positions below this value are shifted down, the rest up, so that no hue
/// lands in the 55–75° band (yellows that vanish against a white background).
const SKIPPED_BAND_START: f64 = 55.0;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Hue in degrees assigned to position `index` of a ramp with `total` steps.
///
/// A `total` of zero is treated as a single-step ramp.
pub fn hue_for(index: usize, total: usize) -> f64 {
    let norm = HUE_SPAN / total.max(1) as f64;
    let hp = index as f64 * norm + HUE_OFFSET;
    if hp < SKIPPED_BAND_START {
        hp - HUE_OFFSET
    } else {
        hp + HUE_OFFSET
    }
}

/// Color for series (or point) `index` out of `total`, at full saturation and value.
pub fn color_for(index: usize, total: usize) -> Rgb {
    hsv_to_rgb(hue_for(index, total), 1.0, 1.0)
}

/// Converts HSV (hue in degrees, saturation and value in [0, 1]) to 8-bit RGB.
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Rgb {
    let s = saturation.clamp(0.0, 1.0);
    let v = value.clamp(0.0, 1.0);
    if s == 0.0 {
        let gray = to_channel(v);
        return Rgb::new(gray, gray, gray);
    }

    let h = hue.rem_euclid(360.0) / 60.0;
    let i = h.floor();
    let f = h - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match (i as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Rgb::new(to_channel(r), to_channel(g), to_channel(b))
}

fn to_channel(x: f64) -> u8 {
    (x * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsv_primary_hues_map_to_pure_channels() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), Rgb::new(255, 0, 0));
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), Rgb::new(0, 255, 0));
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), Rgb::new(0, 0, 255));
    }

    #[test]
    fn hsv_secondary_hues_mix_two_channels() {
        assert_eq!(hsv_to_rgb(60.0, 1.0, 1.0), Rgb::new(255, 255, 0));
        assert_eq!(hsv_to_rgb(180.0, 1.0, 1.0), Rgb::new(0, 255, 255));
        assert_eq!(hsv_to_rgb(300.0, 1.0, 1.0), Rgb::new(255, 0, 255));
    }

    #[test]
    fn hsv_intermediate_hue_rounds_channels() {
        // h' = 0.5 -> t = 0.5 -> 127.5 rounds up.
        assert_eq!(hsv_to_rgb(30.0, 1.0, 1.0), Rgb::new(255, 128, 0));
    }

    #[test]
    fn hsv_zero_saturation_is_gray() {
        assert_eq!(hsv_to_rgb(200.0, 0.0, 0.5), Rgb::new(128, 128, 128));
        assert_eq!(hsv_to_rgb(0.0, 0.0, 1.0), Rgb::new(255, 255, 255));
    }

    #[test]
    fn hsv_full_turn_wraps_to_red() {
        assert_eq!(hsv_to_rgb(360.0, 1.0, 1.0), Rgb::new(255, 0, 0));
    }

    #[test]
    fn first_and_last_colors_differ_for_multiple_series() {
        for total in 2..=40 {
            assert_ne!(
                color_for(0, total),
                color_for(total - 1, total),
                "total = {total}"
            );
        }
    }

    #[test]
    fn single_series_is_red() {
        assert_eq!(hue_for(0, 1), 0.0);
        assert_eq!(color_for(0, 1), Rgb::new(255, 0, 0));
    }

    #[test]
    fn zero_total_is_treated_as_one() {
        assert_eq!(color_for(0, 0), color_for(0, 1));
    }

    #[test]
    fn hue_never_falls_inside_skipped_band() {
        for total in 1..=60 {
            for index in 0..total {
                let hue = hue_for(index, total);
                assert!(
                    !(hue > 55.0 && hue < 75.0),
                    "hue {hue} for {index}/{total} is inside the skipped band"
                );
                assert!((0.0..300.0).contains(&hue));
            }
        }
    }

    #[test]
    fn hue_jumps_only_at_band_edge() {
        // Ramp position hp = 20 + index * 260 / total; with total = 260 each step is 1°.
        let total = 260;
        let hues: Vec<f64> = (0..total).map(|i| hue_for(i, total)).collect();
        for (i, pair) in hues.windows(2).enumerate() {
            let step = pair[1] - pair[0];
            if i + 1 == 35 {
                assert!((step - 41.0).abs() < 1e-9, "jump at band edge was {step}");
            } else {
                assert!((step - 1.0).abs() < 1e-9, "unexpected jump {step} at {i}");
            }
        }
    }

    #[test]
    fn channels_stay_in_range_for_many_ramps() {
        for total in 1..=25 {
            for index in 0..total {
                let Rgb { r, g, b } = color_for(index, total);
                // Full value means at least one channel saturates.
                assert_eq!(r.max(g).max(b), 255);
            }
        }
    }
}
