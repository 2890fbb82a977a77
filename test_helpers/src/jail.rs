//! Helpers for running configuration tests inside [`figment::Jail`].
//!
//! A jail gives each test its own working directory and restores the process
//! environment afterwards. The closure speaks `anyhow` rather than
//! `figment::Error`, so configuration errors keep their type and tests can
//! match on them after the jail is torn down.

use anyhow::{Context, Result};

/// Runs `f` inside a [`figment::Jail`] and returns whatever it produced.
///
/// # Errors
///
/// Returns the closure's own error unchanged, or a context error if the jail
/// cannot be set up.
///
/// # Examples
///
/// ```
/// use apex_theme_test_helpers::jail::with_jail;
///
/// let value = with_jail(|jail| {
///     jail.set_env("APEX_THEMEGEN_MAPPING", "tokens.json");
///     Ok(std::env::var("APEX_THEMEGEN_MAPPING")?)
/// })?;
/// assert_eq!(value, "tokens.json");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> Result<T>,
{
    let mut outcome = None;
    figment::Jail::try_with(|jail| {
        outcome = Some(f(jail));
        Ok(())
    })
    .context("figment jail could not be set up")?;
    outcome.context("jail closure did not run")?
}
