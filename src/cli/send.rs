//! Send command - fill in the contact form and deliver it

use crate::cli::notify::CliNotifier;
use crate::cli::style::{cross, hyperlink_url, Stream, Stylize};
use anstream::{eprintln, println};
use anyhow::{bail, Result};
use dialoguer::{Confirm, Input};
use folio_contact::config::{parse_endpoint, AccessKey, RelayConfig};
use folio_contact::relay::{create_mail_relay, RelayEnvelope, RelayPayload};
use folio_contact::submit::{validate_form, ButtonView, SubmissionController, LABEL_RETRY};
use folio_contact::types::{Field, FieldErrors, FormFields, SubmitOutcome};
use std::io::IsTerminal;
use std::sync::Arc;

/// Field values and switches given on the command line
#[derive(Debug, Default)]
pub struct SendOptions {
    /// Preset name
    pub name: Option<String>,
    /// Preset email
    pub email: Option<String>,
    /// Preset subject
    pub subject: Option<String>,
    /// Preset message
    pub message: Option<String>,
    /// Endpoint override
    pub endpoint: Option<String>,
    /// Validate and print the request instead of sending
    pub dry_run: bool,
}

impl SendOptions {
    fn preset(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Subject => self.subject.as_deref(),
            Field::Message => self.message.as_deref(),
        }
    }
}

/// Run the send command
///
/// Missing fields are prompted for when stdin is a terminal and left empty
/// otherwise. Without a terminal every failure ends the command.
pub async fn run_send(options: SendOptions) -> Result<()> {
    let mut config = RelayConfig::from_env()?;
    if let Some(endpoint) = options.endpoint.as_deref() {
        config.endpoint = parse_endpoint(endpoint)?;
    }

    let interactive = std::io::stdin().is_terminal();

    let relay = create_mail_relay(&config)?;
    let controller = SubmissionController::new(relay, Arc::new(CliNotifier::new()))
        .with_timeout(config.timeout);

    for field in Field::ALL {
        let value = match options.preset(field) {
            Some(value) => value.to_string(),
            None if interactive => prompt_field(field, false, "")?,
            None => String::new(),
        };
        controller.edit(field, value);
    }

    if options.dry_run {
        return report_dry_run(&config, &controller.snapshot().fields);
    }

    loop {
        if interactive
            && !Confirm::new()
                .with_prompt(button_prompt(controller.button()))
                .default(true)
                .interact()?
        {
            println!("{}", "Message not sent".muted());
            return Ok(());
        }

        match controller.submit().await {
            SubmitOutcome::Sent => {
                println!("{}", controller.button().label.success());
                return Ok(());
            }
            SubmitOutcome::Invalid(errors) => {
                if !interactive {
                    report_flagged(&errors);
                    bail!("{} field(s) need attention", errors.flagged().len());
                }
                let current = controller.snapshot().fields;
                for field in errors.flagged() {
                    controller.focus(field);
                    let value = prompt_field(field, true, current.get(field))?;
                    controller.edit(field, value);
                }
            }
            SubmitOutcome::Failed => {
                if !interactive {
                    eprintln!(
                        "{}",
                        format!("{LABEL_RETRY}: run the command again to resend").warn()
                    );
                    bail!("message was not delivered");
                }
            }
            SubmitOutcome::Ignored => bail!("a submission is already in flight"),
        }
    }
}

/// Confirmation prompt for the submit button, highlighted once a resend is offered
fn button_prompt(button: ButtonView) -> String {
    if button.label == LABEL_RETRY {
        button.label.warn().to_string()
    } else {
        button.label.to_string()
    }
}

fn prompt_field(field: Field, flagged: bool, current: &str) -> Result<String> {
    let value = Input::<String>::new()
        .with_prompt(field.placeholder(flagged))
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

fn report_flagged(errors: &FieldErrors) {
    for field in errors.flagged() {
        eprintln!(
            "  {} {}: {}",
            cross(),
            field.accent().for_stderr(),
            field.error_hint()
        );
    }
}

/// Print what would be sent, with the access key redacted
fn report_dry_run(config: &RelayConfig, fields: &FormFields) -> Result<()> {
    let errors = validate_form(fields);
    if errors.any() {
        report_flagged(&errors);
        bail!("{} field(s) need attention", errors.flagged().len());
    }

    let redacted = AccessKey::new(config.access_key.to_string());
    let envelope = RelayEnvelope::wrap(&RelayPayload::new(fields, &redacted))?;

    println!("{}", "Dry run - nothing will be sent".muted());
    println!(
        "POST {}",
        hyperlink_url(Stream::Stdout, config.endpoint.as_str()).accent()
    );
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}
