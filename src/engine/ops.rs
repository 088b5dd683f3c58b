use crate::engine::error::{EngineError, Result};
use crate::engine::model::Operand;

/// Sums a non-empty sequence of finite numbers.
///
/// Accumulation starts from the additive identity and visits every element
/// exactly once, in sequence order.
pub fn sum(operands: &[f64]) -> Result<f64> {
    ensure_non_empty(operands, "sum")?;

    let mut total = 0.0;
    for &value in operands {
        ensure_finite(value)?;
        total += value;
    }

    Ok(total)
}

/// Returns `a - b` after validating both operands.
pub fn subtract(a: impl Into<Operand>, b: impl Into<Operand>) -> Result<f64> {
    let (a, b) = finite_pair(a.into(), b.into())?;
    Ok(a - b)
}

/// Multiplies a non-empty sequence of finite numbers.
///
/// Accumulation starts from the multiplicative identity; a zero anywhere in
/// the sequence yields zero through ordinary multiplication.
pub fn multiply(operands: &[f64]) -> Result<f64> {
    ensure_non_empty(operands, "multiply")?;

    let mut product = 1.0;
    for &value in operands {
        ensure_finite(value)?;
        product *= value;
    }

    Ok(product)
}

/// Returns `a / b` after validating both operands.
///
/// The divisor is checked for zero only once both operands have passed the
/// finiteness check, so a non-finite dividend takes precedence over a zero
/// divisor.
pub fn divide(a: impl Into<Operand>, b: impl Into<Operand>) -> Result<f64> {
    let (a, b) = finite_pair(a.into(), b.into())?;

    if b == 0.0 {
        return Err(EngineError::DivisionByZero);
    }

    Ok(a / b)
}

fn ensure_non_empty(operands: &[f64], operation: &'static str) -> Result<()> {
    if operands.is_empty() {
        return Err(EngineError::EmptyOperands(operation));
    }
    Ok(())
}

fn ensure_finite(value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(EngineError::NonFiniteOperand(value.to_string()));
    }
    Ok(())
}

fn finite_pair(a: Operand, b: Operand) -> Result<(f64, f64)> {
    match (a.finite(), b.finite()) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(EngineError::NonFiniteOperandPair(
            a.to_string(),
            b.to_string(),
        )),
    }
}
