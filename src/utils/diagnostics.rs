use crate::core::tracing_init::DIAGNOSTICS_TARGET;
use tracing::debug;

/// Double every element.
///
/// Progress is reported as `debug` events on the `diagnostics` target, which
/// the installed subscriber may drop entirely.
pub fn double_values(data: &[f64]) -> Vec<f64> {
    debug!(target: DIAGNOSTICS_TARGET, len = data.len(), "Processing data");

    let result: Vec<f64> = data
        .iter()
        .map(|item| {
            debug!(target: DIAGNOSTICS_TARGET, item, "Processing item");
            item * 2.0
        })
        .collect();

    debug!(target: DIAGNOSTICS_TARGET, result = ?result, "Processing complete");
    result
}
