//! Bound line grammar.
//!
//! Three surface forms describe the same entity:
//!
//! - named-first `x <= 10`: one side, recorded with the inverted operator
//! - value-first `0 <= x [<= 10]`: first clause as written, optional second
//!   clause recorded inverted
//! - `x = 3` / `3 = x`: both sides pinned to the same value
//!
//! A `free` (or any unrecognised) operator leaves the default `0 <= x <= +inf`.

use crate::errors::Result;
use crate::model::{Bound, BoundOperator};
use crate::parse::parse_f32;
use crate::parse::tokenizer::{is_identifier, tokenize, BOUND_DELIMITERS};

const VALUE_FIELD: &str = "bound value";

/// Parse one bound line.
///
/// Returns `Ok(None)` for an empty line or when a required token is missing.
///
/// # Errors
///
/// `InvalidNumber` when a bound magnitude does not parse as `f32`.
pub fn parse_bound(line: &str) -> Result<Option<Bound>> {
    let tokens = tokenize(line.trim(), BOUND_DELIMITERS);
    let Some(first) = tokens.first() else {
        return Ok(None);
    };

    let mut bound = Bound::default();

    if is_identifier(first) {
        bound.variable_name = first.to_string();

        let Some(op_token) = tokens.get(1) else {
            return Ok(None);
        };
        let op = BoundOperator::from_token(op_token);
        if op != BoundOperator::Free {
            let Some(value) = tokens.get(2) else {
                return Ok(None);
            };
            set_side(&mut bound, op.invert(), value, false)?;
        }
    } else {
        if tokens.len() < 3 {
            return Ok(None);
        }
        bound.variable_name = tokens[2].to_string();

        let op = BoundOperator::from_token(tokens[1]);
        if op != BoundOperator::Free {
            set_side(&mut bound, op, tokens[0], false)?;
        }

        if tokens.len() == 5 {
            let op = BoundOperator::from_token(tokens[3]);
            if op != BoundOperator::Free {
                set_side(&mut bound, op.invert(), tokens[4], true)?;
            }
        }
    }

    Ok(Some(bound))
}

/// Record one relation on `bound`.
///
/// `op` is the operator as it will be stored. For clauses that were inverted
/// before the call, the original operator also selects the side.
fn set_side(bound: &mut Bound, op: BoundOperator, value: &str, inverted: bool) -> Result<()> {
    let check_op = if inverted { op.invert() } else { op };

    if op == BoundOperator::Equal {
        let v = parse_f32(value, VALUE_FIELD)?;
        bound.lower_bound = v;
        bound.upper_bound = v;
        bound.lower_operator = op;
        bound.upper_operator = op;
    } else if op.is_greater() || check_op.is_greater() {
        bound.upper_bound = parse_f32(value, VALUE_FIELD)?;
        bound.upper_operator = op;
    } else if op.is_less() || check_op.is_less() {
        bound.lower_bound = parse_f32(value, VALUE_FIELD)?;
        bound.lower_operator = op;
    }

    Ok(())
}
