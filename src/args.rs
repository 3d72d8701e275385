//! Typed extraction from the positional JSON argument array.
//!
//! Each action declares which index holds which type; a missing or
//! mistyped argument is rejected at the boundary with a descriptive
//! error instead of failing deep inside a handler.
use serde_json::Value;

use crate::error::BridgeError;

pub struct ArgumentList<'a>(&'a [Value]);

impl<'a> ArgumentList<'a> {
    pub fn new(args: &'a [Value]) -> Self {
        ArgumentList(args)
    }

    fn get(&self, index: usize) -> Result<&'a Value, BridgeError> {
        self.0.get(index).ok_or(BridgeError::MissingArgument(index))
    }

    pub fn string(&self, index: usize) -> Result<String, BridgeError> {
        self.get(index)?
            .as_str()
            .map(str::to_owned)
            .ok_or(BridgeError::WrongArgumentType {
                index,
                expected: "a string",
            })
    }

    pub fn number(&self, index: usize) -> Result<f64, BridgeError> {
        self.get(index)?
            .as_f64()
            .ok_or(BridgeError::WrongArgumentType {
                index,
                expected: "a number",
            })
    }

    pub fn integer(&self, index: usize) -> Result<i64, BridgeError> {
        self.get(index)?
            .as_i64()
            .ok_or(BridgeError::WrongArgumentType {
                index,
                expected: "an integer",
            })
    }

    pub fn boolean(&self, index: usize) -> Result<bool, BridgeError> {
        self.get(index)?
            .as_bool()
            .ok_or(BridgeError::WrongArgumentType {
                index,
                expected: "a boolean",
            })
    }

    pub fn object(&self, index: usize) -> Result<&'a Value, BridgeError> {
        let value = self.get(index)?;
        if value.is_object() {
            Ok(value)
        } else {
            Err(BridgeError::WrongArgumentType {
                index,
                expected: "an object",
            })
        }
    }

    /// A number carried as a string, e.g. the value of
    /// `trackConversionWithValue`.
    pub fn numeric_string(&self, index: usize) -> Result<f64, BridgeError> {
        self.string(index)?
            .parse()
            .map_err(|_| BridgeError::WrongArgumentType {
                index,
                expected: "a numeric string",
            })
    }
}
