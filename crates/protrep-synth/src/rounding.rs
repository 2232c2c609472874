/// Round `value` to `decimals` places, ties away from zero.
///
/// The tie rule applies to the decimally scaled value: `round_to(0.125, 2) == 0.13`.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
