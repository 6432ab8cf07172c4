//! `projectdesk validate`: run the form validator on command-line input.

use tracing::{debug, instrument, trace};

use projectdesk_core::{
    application::ApplicationError,
    domain::{FormErrors, FormValidator, Observable},
};

use crate::{
    cli::ValidateArgs,
    commands::wants_json,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Validate the form; an invalid form is a user error (exit 2).
#[instrument(skip_all)]
pub fn execute(args: ValidateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let json = wants_json(args.format, &output);
    let form = args.form.into_form();

    let mut errors = Observable::new(FormErrors::default());
    errors.subscribe(|record: &FormErrors| {
        trace!(failing = record.failing().count(), "Error record written");
    });

    let valid = FormValidator::new(&form, &mut errors)
        .with_locale(config.locale)
        .validate_form();
    let errors = errors.into_inner();

    debug!(
        valid,
        failing = %errors,
        locale = %config.locale,
        "Form validated"
    );

    if json {
        output.json(&errors)?;
    } else if valid {
        output.success("Form is valid")?;
    } else {
        for (field, message) in errors.failing() {
            output.error(&format!("{field}: {message}"))?;
        }
    }

    if valid {
        Ok(())
    } else {
        Err(CliError::Core(ApplicationError::InvalidForm { errors }.into()))
    }
}
