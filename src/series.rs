use crate::error::ExportError;

/// Creates numbered output stems `prefix{start}`, `prefix{start + step}`, ... up to and including
/// `last`. Used to name the files of a time series, e.g. `chains_0`, `chains_3000`, ...
pub fn numbered_stems(prefix: &str, start: usize, last: usize, step: usize) -> Result<Vec<String>, ExportError> {
    if step == 0 {
        return Err(ExportError::InvalidStep);
    }
    Ok((start..=last)
        .step_by(step)
        .map(|i| format!("{prefix}{i}"))
        .collect())
}
