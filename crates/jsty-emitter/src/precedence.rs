//! Binary-operator binding strengths.
//!
//! Consulted by the binary-expression generator before recursing into an
//! operand that is itself a binary expression. The operand is emitted
//! bare only when it binds at least as tightly as its position requires;
//! all operators here are left-associative, so a right operand with
//! merely equal precedence still needs parentheses (`a - (b - c)`).

use jsty_ast::BinaryOp;

/// Numeric binding strength; larger binds tighter.
pub fn precedence(op: BinaryOp) -> u8 {
    use BinaryOp::*;
    match op {
        Mul | Div | Mod => 10,
        Add | Sub => 9,
        Shl | Shr | UShr => 8,
        Lt | LtEq | Gt | GtEq | In | Instanceof => 7,
        EqEq | NotEq | EqEqEq | NotEqEq => 6,
        BitAnd => 5,
        BitXor => 4,
        BitOr => 3,
    }
}

/// Whether `inner` binds at least as tightly as `outer`.
pub fn has_precedence(outer: BinaryOp, inner: BinaryOp) -> bool {
    precedence(inner) >= precedence(outer)
}

/// Whether a left operand with operator `inner` needs parentheses under
/// `outer`.
pub fn left_operand_needs_parens(outer: BinaryOp, inner: BinaryOp) -> bool {
    !has_precedence(outer, inner)
}

/// Whether a right operand with operator `inner` needs parentheses under
/// `outer`. Equal precedence parenthesizes because evaluation is
/// left-to-right.
pub fn right_operand_needs_parens(outer: BinaryOp, inner: BinaryOp) -> bool {
    precedence(inner) <= precedence(outer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsty_ast::BinaryOp::*;

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert!(has_precedence(Add, Mul));
        assert!(!has_precedence(Mul, Add));
        assert!(!left_operand_needs_parens(Add, Mul));
        assert!(left_operand_needs_parens(Mul, Add));
    }

    #[test]
    fn equal_precedence_parenthesizes_only_on_the_right() {
        assert!(!left_operand_needs_parens(Sub, Sub));
        assert!(right_operand_needs_parens(Sub, Sub));
        assert!(right_operand_needs_parens(Div, Mul));
    }

    #[test]
    fn comparison_under_bitwise_needs_no_parens() {
        assert!(!left_operand_needs_parens(BitAnd, EqEqEq));
        assert!(!right_operand_needs_parens(BitAnd, EqEqEq));
    }
}
