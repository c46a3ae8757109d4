//! Validation rules for session configuration using Validation.

use crate::config::violations::ConfigViolation;
use crate::config::SessionConfig;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result of a single configuration check.
pub type ConfigCheck = Validation<(), NonEmptyVec<ConfigViolation>>;

/// Validate a configuration, accumulating ALL violations.
///
/// Returns `Validation::Success(())` if every check passes, or
/// `Validation::Failure` carrying every violation found.
pub fn validate(config: &SessionConfig) -> ConfigCheck {
    let mut checks: Vec<ConfigCheck> = Vec::new();

    for (index, &rate) in config.tax_presets.iter().enumerate() {
        checks.push(check_preset(rate));

        let seen_before = config.tax_presets[..index].contains(&rate);
        if seen_before {
            checks.push(Validation::fail(ConfigViolation::DuplicateTaxPreset { rate }));
        }
    }

    checks.push(if config.undo_depth == 0 {
        Validation::fail(ConfigViolation::ZeroUndoDepth)
    } else {
        Validation::success(())
    });

    Validation::all_vec(checks).map(|_| ())
}

fn check_preset(rate: f64) -> ConfigCheck {
    if !rate.is_finite() {
        Validation::fail(ConfigViolation::NonFiniteTaxPreset { rate })
    } else if rate < 0.0 {
        Validation::fail(ConfigViolation::NegativeTaxPreset { rate })
    } else {
        Validation::success(())
    }
}
