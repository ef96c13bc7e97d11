//! Imperial to metric conversions.

const METERS_PER_FOOT: f64 = 0.3048;
const METERS_PER_INCH: f64 = 0.0254;
const KILOGRAMS_PER_POUND: f64 = 0.4535924;

pub fn height_to_meters(feet: u32, inches: u32) -> f64 {
    f64::from(feet) * METERS_PER_FOOT + f64::from(inches) * METERS_PER_INCH
}

pub fn weight_to_kilograms(pounds: u32) -> f64 {
    f64::from(pounds) * KILOGRAMS_PER_POUND
}
