//! Constraint row grammar.
//!
//! A row is `[name:] operand* <op> <rhs>` where operands are bare signs,
//! coefficients and variable names. Each variable name closes a term with the
//! sign and coefficient seen since the previous term.

use crate::errors::Result;
use crate::model::{Constraint, ConstraintOperator, Term};
use crate::parse::tokenizer::{is_identifier_start, tokenize, CONSTRAINT_DELIMITERS};
use crate::parse::parse_f64;

/// Parse one logical constraint row (all its physical lines joined).
///
/// Returns `Ok(None)` when the row has fewer than three tokens; every row
/// needs at least something before the trailing `<op> <rhs>` pair.
///
/// # Errors
///
/// `InvalidNumber` when a coefficient or the right-hand side does not parse
/// as `f64`.
pub fn parse_constraint(row: &str) -> Result<Option<Constraint>> {
    let tokens = tokenize(row, CONSTRAINT_DELIMITERS);
    if tokens.len() < 3 {
        return Ok(None);
    }

    let (head, tail) = tokens.split_at(tokens.len() - 2);
    let (op_token, rhs_token) = (tail[0], tail[1]);

    let mut name = None;
    let mut operands: Vec<&str> = Vec::with_capacity(head.len());
    match head.split_first() {
        Some((first, rest)) if first.contains(':') => {
            if let Some((label, remainder)) = first.split_once(':') {
                name = Some(label.to_string());
                if !remainder.is_empty() {
                    operands.push(remainder);
                }
            }
            operands.extend_from_slice(rest);
        }
        _ => operands.extend_from_slice(head),
    }

    let terms = scan_terms(&operands)?;
    let sign = ConstraintOperator::from_token(op_token);
    let rhs = parse_f64(rhs_token, "right-hand side")?;

    Ok(Some(Constraint::new(name, terms, sign, rhs)))
}

enum Operand<'a> {
    Sign { negative: bool },
    Coefficient(&'a str),
    SignedCoefficient { negative: bool, digits: &'a str },
    Variable(&'a str),
    Ignored,
}

fn classify(token: &str) -> Operand<'_> {
    let mut chars = token.chars();
    let first = chars.next();
    let second = chars.next();

    match (first, second) {
        (Some(sign @ ('+' | '-')), None) => Operand::Sign {
            negative: sign == '-',
        },
        (Some(c), _) if c.is_ascii_digit() || c == '.' => Operand::Coefficient(token),
        (Some(sign @ ('+' | '-')), Some(c)) if c.is_ascii_digit() || c == '.' => {
            Operand::SignedCoefficient {
                negative: sign == '-',
                digits: &token[1..],
            }
        }
        (Some(c), _) if is_identifier_start(c) => Operand::Variable(token),
        _ => Operand::Ignored,
    }
}

fn scan_terms(operands: &[&str]) -> Result<Vec<Term>> {
    let mut terms = Vec::new();
    let mut negative = false;
    let mut coefficient = 1.0;

    for token in operands {
        match classify(token) {
            Operand::Sign { negative: n } => negative = n,
            Operand::Coefficient(text) => {
                coefficient = parse_f64(text, "coefficient")?;
            }
            Operand::SignedCoefficient {
                negative: n,
                digits,
            } => {
                negative ^= n;
                coefficient = parse_f64(digits, "coefficient")?;
            }
            Operand::Variable(name) => {
                let value = if negative { -coefficient } else { coefficient };
                terms.push(Term::new(name, value));
                negative = false;
                coefficient = 1.0;
            }
            Operand::Ignored => {}
        }
    }

    Ok(terms)
}
