//! Length, weight and temperature conversion.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitCategory {
    Length,
    Weight,
    Temperature,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    pub name: &'static str,
    pub symbol: &'static str,
    /// Multiplier to the category's base unit. Unused for temperature.
    pub factor: f64,
}

const fn unit(name: &'static str, symbol: &'static str, factor: f64) -> Unit {
    Unit { name, symbol, factor }
}

const LENGTH: &[Unit] = &[
    unit("Meter", "m", 1.0),
    unit("Kilometer", "km", 1000.0),
    unit("Centimeter", "cm", 0.01),
    unit("Millimeter", "mm", 0.001),
    unit("Inch", "in", 0.0254),
    unit("Foot", "ft", 0.3048),
    unit("Yard", "yd", 0.9144),
    unit("Mile", "mi", 1609.344),
];

const WEIGHT: &[Unit] = &[
    unit("Kilogram", "kg", 1.0),
    unit("Gram", "g", 0.001),
    unit("Pound", "lb", 0.453592),
    unit("Ounce", "oz", 0.0283495),
    unit("Ton", "t", 1000.0),
    unit("Stone", "st", 6.35029),
];

const TEMPERATURE: &[Unit] = &[
    unit("Celsius", "C", 1.0),
    unit("Fahrenheit", "F", 1.0),
    unit("Kelvin", "K", 1.0),
];

impl UnitCategory {
    pub fn units(self) -> &'static [Unit] {
        match self {
            UnitCategory::Length => LENGTH,
            UnitCategory::Weight => WEIGHT,
            UnitCategory::Temperature => TEMPERATURE,
        }
    }

    /// Look a unit up by symbol or name, ignoring case and a leading `°`.
    pub fn unit(self, key: &str) -> Result<&'static Unit, ValidationError> {
        let key = key.trim().trim_start_matches('°');
        self.units()
            .iter()
            .find(|u| u.symbol.eq_ignore_ascii_case(key) || u.name.eq_ignore_ascii_case(key))
            .ok_or_else(|| ValidationError::InvalidValue {
                field: "unit".into(),
                message: format!("'{key}' is not a {self} unit"),
            })
    }

    pub fn convert(self, value: f64, from: &str, to: &str) -> Result<f64, ValidationError> {
        let from = self.unit(from)?;
        let to = self.unit(to)?;
        Ok(match self {
            UnitCategory::Temperature => from_celsius(to_celsius(value, from), to),
            _ => value * from.factor / to.factor,
        })
    }
}

fn to_celsius(value: f64, unit: &Unit) -> f64 {
    match unit.symbol {
        "F" => (value - 32.0) * 5.0 / 9.0,
        "K" => value - 273.15,
        _ => value,
    }
}

fn from_celsius(celsius: f64, unit: &Unit) -> f64 {
    match unit.symbol {
        "F" => celsius * 9.0 / 5.0 + 32.0,
        "K" => celsius + 273.15,
        _ => celsius,
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UnitCategory::Length => "length",
            UnitCategory::Weight => "weight",
            UnitCategory::Temperature => "temperature",
        })
    }
}

impl FromStr for UnitCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "length" => Ok(UnitCategory::Length),
            "weight" | "mass" => Ok(UnitCategory::Weight),
            "temperature" | "temp" => Ok(UnitCategory::Temperature),
            other => Err(ValidationError::InvalidValue {
                field: "category".into(),
                message: format!("unknown category '{other}'"),
            }),
        }
    }
}

/// Six decimals, trailing zeros and a dangling point dropped.
pub fn format_result(value: f64) -> String {
    let fixed = format!("{value:.6}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" => "0".to_string(),
        t => t.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn length_and_weight_factors() {
        assert!(close(UnitCategory::Length.convert(1.0, "mi", "km").unwrap(), 1.609344));
        assert!(close(UnitCategory::Length.convert(12.0, "in", "ft").unwrap(), 1.0));
        assert!(close(UnitCategory::Weight.convert(2.0, "t", "kg").unwrap(), 2000.0));
    }

    #[test]
    fn temperature_goes_through_celsius() {
        assert!(close(UnitCategory::Temperature.convert(212.0, "°F", "C").unwrap(), 100.0));
        assert!(close(UnitCategory::Temperature.convert(0.0, "K", "celsius").unwrap(), -273.15));
        assert!(close(UnitCategory::Temperature.convert(-40.0, "C", "F").unwrap(), -40.0));
    }

    #[test]
    fn unknown_units_are_rejected() {
        assert!(UnitCategory::Weight.convert(1.0, "m", "kg").is_err());
        assert!("volume".parse::<UnitCategory>().is_err());
    }

    #[test]
    fn formats_like_fixed_six_trimmed() {
        assert_eq!(format_result(1.5), "1.5");
        assert_eq!(format_result(100.0), "100");
        assert_eq!(format_result(1.0 / 3.0), "0.333333");
        assert_eq!(format_result(0.0000001), "0");
    }
}
