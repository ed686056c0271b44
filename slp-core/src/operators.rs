#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ArithmeticOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl ArithmeticOperator {
    pub fn from_verb(verb: &str) -> Option<Self> {
        match verb {
            "add" => Some(ArithmeticOperator::Add),
            "sub" => Some(ArithmeticOperator::Subtract),
            "mul" => Some(ArithmeticOperator::Multiply),
            "div" => Some(ArithmeticOperator::Divide),
            _ => None,
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            ArithmeticOperator::Add => "add",
            ArithmeticOperator::Subtract => "sub",
            ArithmeticOperator::Multiply => "mul",
            ArithmeticOperator::Divide => "div",
        }
    }

    /// Applies the operator with two's complement wraparound on overflow.
    /// Division truncates toward zero.
    ///
    /// Returns `None` only when dividing by zero.
    pub fn evaluate(&self, left: i64, right: i64) -> Option<i64> {
        match self {
            ArithmeticOperator::Add => Some(left.wrapping_add(right)),
            ArithmeticOperator::Subtract => Some(left.wrapping_sub(right)),
            ArithmeticOperator::Multiply => Some(left.wrapping_mul(right)),
            ArithmeticOperator::Divide => {
                if right == 0 {
                    None
                } else {
                    Some(left.wrapping_div(right))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ArithmeticOperator::{self, *};

    #[test]
    fn verbs_map_to_operators() {
        for op in [Add, Subtract, Multiply, Divide] {
            assert_eq!(ArithmeticOperator::from_verb(op.verb()), Some(op));
        }
        assert_eq!(ArithmeticOperator::from_verb("ADD"), None);
        assert_eq!(ArithmeticOperator::from_verb("mod"), None);
    }

    #[test]
    fn division_truncates_toward_zero() {
        assert_eq!(Divide.evaluate(7, 2), Some(3));
        assert_eq!(Divide.evaluate(-7, 2), Some(-3));
        assert_eq!(Divide.evaluate(7, -2), Some(-3));
    }

    #[test]
    fn division_by_zero_is_none() {
        assert_eq!(Divide.evaluate(10, 0), None);
    }

    #[test]
    fn overflow_wraps_around() {
        assert_eq!(Add.evaluate(i64::MAX, 1), Some(i64::MIN));
        assert_eq!(Subtract.evaluate(i64::MIN, 1), Some(i64::MAX));
        assert_eq!(Multiply.evaluate(i64::MAX, 2), Some(-2));
        assert_eq!(Divide.evaluate(i64::MIN, -1), Some(i64::MIN));
    }
}
