//! Four-function pocket calculator.
//!
//! Operations chain left to right with no precedence: `2 + 3 * 4 =` shows
//! `20`. The display is text so that trailing zeros and a lone decimal point
//! survive while the user is typing.

use std::fmt;

use serde::Serialize;

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    Decimal,
    Operator(Operator),
    Equals,
    Backspace,
    Clear,
}

impl TryFrom<char> for Key {
    type Error = ValidationError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Ok(match c {
            '0'..='9' => Key::Digit(c as u8 - b'0'),
            '.' => Key::Decimal,
            '+' => Key::Operator(Operator::Add),
            '-' => Key::Operator(Operator::Subtract),
            '*' | 'x' | '×' => Key::Operator(Operator::Multiply),
            '/' | '÷' => Key::Operator(Operator::Divide),
            '=' => Key::Equals,
            '<' | '⌫' => Key::Backspace,
            'c' | 'C' => Key::Clear,
            other => {
                return Err(ValidationError::InvalidValue {
                    field: "key".into(),
                    message: format!("'{other}' is not a calculator key"),
                })
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    display: String,
    previous: Option<f64>,
    pending: Option<Operator>,
    waiting_for_operand: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            previous: None,
            pending: None,
            waiting_for_operand: false,
        }
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    /// Left operand and operator waiting for a right operand, shown above
    /// the display.
    pub fn pending(&self) -> Option<(f64, Operator)> {
        self.previous.zip(self.pending)
    }

    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(d) => self.input_digit(d),
            Key::Decimal => self.input_decimal(),
            Key::Operator(op) => self.perform(Some(op)),
            Key::Equals => self.equals(),
            Key::Backspace => self.backspace(),
            Key::Clear => self.clear(),
        }
    }

    /// Feed a sequence of keys, ignoring whitespace. Nothing is pressed when
    /// any character is not a key.
    pub fn press_all(&mut self, keys: &str) -> Result<(), ValidationError> {
        let keys = keys
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(Key::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        for key in keys {
            self.press(key);
        }
        Ok(())
    }

    pub fn input_digit(&mut self, digit: u8) {
        let digit = char::from(b'0' + digit.min(9));
        if self.waiting_for_operand {
            self.display = digit.to_string();
            self.waiting_for_operand = false;
        } else if self.display == "0" {
            self.display = digit.to_string();
        } else {
            self.display.push(digit);
        }
    }

    pub fn input_decimal(&mut self) {
        if self.waiting_for_operand {
            self.display = "0.".to_string();
            self.waiting_for_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    pub fn backspace(&mut self) {
        if self.display.chars().count() > 1 {
            self.display.pop();
        } else {
            self.display = "0".to_string();
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn equals(&mut self) {
        self.perform(None);
        self.previous = None;
    }

    /// Fold the display into the running value and remember `next` as the
    /// operator for the following operand.
    fn perform(&mut self, next: Option<Operator>) {
        let input = self.value();
        match (self.previous, self.pending) {
            (None, _) => self.previous = Some(input),
            (Some(lhs), Some(op)) => {
                let result = op.apply(lhs, input);
                self.display = format_number(result);
                self.previous = Some(result);
            }
            (Some(_), None) => {}
        }
        self.waiting_for_operand = true;
        self.pending = next;
    }

    /// Numeric value of the display; NaN when it no longer parses.
    pub fn value(&self) -> f64 {
        self.display.parse().unwrap_or(f64::NAN)
    }
}

/// Shortest text for `value`; division by zero shows `Infinity`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(keys: &str) -> Calculator {
        let mut calc = Calculator::new();
        calc.press_all(keys).unwrap();
        calc
    }

    #[test]
    fn starts_at_zero() {
        let calc = Calculator::new();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.pending(), None);
    }

    #[test]
    fn four_operators() {
        assert_eq!(run("7+5=").display(), "12");
        assert_eq!(run("7-9=").display(), "-2");
        assert_eq!(run("6*7=").display(), "42");
        assert_eq!(run("9/4=").display(), "2.25");
    }

    #[test]
    fn operations_chain_left_to_right() {
        let mut calc = run("2+3*");
        assert_eq!(calc.display(), "5");
        assert_eq!(calc.pending(), Some((5.0, Operator::Multiply)));
        calc.press_all("4=").unwrap();
        assert_eq!(calc.display(), "20");
        assert_eq!(calc.pending(), None);
    }

    #[test]
    fn decimal_point_once_per_operand() {
        assert_eq!(run("1.2.5").display(), "1.25");
        assert_eq!(run("3+.5=").display(), "3.5");
        assert_eq!(run("0.1+0.2=").display(), "0.30000000000000004");
    }

    #[test]
    fn backspace_and_clear() {
        let mut calc = run("123<");
        assert_eq!(calc.display(), "12");
        calc.press_all("<<").unwrap();
        assert_eq!(calc.display(), "0");

        let mut calc = run("8*");
        calc.press(Key::Clear);
        assert_eq!(calc, Calculator::new());
    }

    #[test]
    fn division_by_zero_shows_infinity() {
        assert_eq!(run("5/0=").display(), "Infinity");
        assert_eq!(run("0/0=").display(), "NaN");
    }

    #[test]
    fn digits_after_equals_start_fresh() {
        let mut calc = run("2+2=");
        calc.press_all("9").unwrap();
        assert_eq!(calc.display(), "9");
    }

    #[test]
    fn unknown_key_presses_nothing() {
        let mut calc = run("12");
        assert!(calc.press_all("3%").is_err());
        assert_eq!(calc.display(), "12");
    }
}
