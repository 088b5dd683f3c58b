use tracing::{debug, info, instrument};

use crate::engine::error::{EngineError, Result};
use crate::engine::model::ResultValue;
use crate::engine::ops;
use crate::engine::store::{TextSink, TextSource};

/// Sums the numbers found in the text addressed by `path`.
///
/// The source text is split on runs of newlines and commas; tokens that do
/// not parse to a finite number are dropped silently. This lenient policy is
/// deliberate, a malformed token never fails the whole operation. Every
/// failure path surfaces as [`EngineError::SumFromFile`] with the underlying
/// message embedded.
#[instrument(level = "info", skip(store))]
pub fn sum_from_file(store: &impl TextSource, path: &str) -> Result<f64> {
    let text = store
        .read(path)
        .map_err(|error| EngineError::SumFromFile(error.to_string()))?;

    let numbers = parse_numbers(&text);
    debug!(token_count = numbers.len(), "parsed numeric tokens");

    if numbers.is_empty() {
        return Err(EngineError::SumFromFile(
            EngineError::NoValidNumbers.to_string(),
        ));
    }

    let total =
        ops::sum(&numbers).map_err(|error| EngineError::SumFromFile(error.to_string()))?;
    info!(total, "summed numbers from source");
    Ok(total)
}

/// Renders `value` as `result: <value>` and writes it as the full content of
/// the destination addressed by `path`. Existing content is replaced.
#[instrument(level = "info", skip(store, value))]
pub fn write_result(
    store: &impl TextSink,
    path: &str,
    value: impl Into<ResultValue>,
) -> Result<()> {
    let content = format!("result: {}", value.into());
    store
        .write(path, &content)
        .map_err(|error| EngineError::WriteFile(error.to_string()))
}

/// Splits `text` on runs of newline and comma characters and keeps the
/// tokens that parse to finite numbers.
fn parse_numbers(text: &str) -> Vec<f64> {
    text.split(['\n', ','])
        .filter_map(|token| token.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .collect()
}
