use std::fmt;

/// A runtime value. Integer and real constants keep their own representation
/// instead of being unified into a single numeric type; mixed arithmetic
/// widens to `Real`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Int(i64),
    Real(f64),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl Value {
    fn as_real(self) -> f64 {
        match self {
            Value::Int(v) => v as f64,
            Value::Real(v) => v,
        }
    }

    pub fn add(self, rhs: Value) -> Value {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => Value::Int(a + b),
            (a, b) => Value::Real(a.as_real() + b.as_real()),
        }
    }

    pub fn sub(self, rhs: Value) -> Value {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => Value::Int(a - b),
            (a, b) => Value::Real(a.as_real() - b.as_real()),
        }
    }

    pub fn mul(self, rhs: Value) -> Value {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => Value::Int(a * b),
            (a, b) => Value::Real(a.as_real() * b.as_real()),
        }
    }

    /// Truncating division for `DIV`. Returns `None` on a zero divisor.
    pub fn checked_int_div(self, rhs: Value) -> Option<Value> {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => {
                if b == 0 {
                    None
                } else {
                    Some(Value::Int(a.wrapping_div(b)))
                }
            }
            (a, b) => {
                let divisor = b.as_real();
                if divisor == 0.0 {
                    None
                } else {
                    Some(Value::Int((a.as_real() / divisor).trunc() as i64))
                }
            }
        }
    }

    /// Real division for `/`. Both operands widen to floating point, so a
    /// zero divisor follows IEEE semantics rather than failing.
    pub fn real_div(self, rhs: Value) -> Value {
        Value::Real(self.as_real() / rhs.as_real())
    }

    pub fn neg(self) -> Value {
        match self {
            Value::Int(v) => Value::Int(-v),
            Value::Real(v) => Value::Real(-v),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Real(v) => write!(f, "{}", v),
        }
    }
}
