//! Config command - show the resolved relay configuration

use crate::cli::style::{check, cross, hyperlink_url, Stream, Stylize};
use anstream::{eprintln, println};
use folio_contact::config::{
    RelayConfig, ACCESS_KEY_VAR, DEFAULT_RELAY_URL, DEFAULT_TIMEOUT_SECS, LEGACY_ACCESS_KEY_VAR,
    RELAY_TIMEOUT_VAR, RELAY_URL_VAR,
};
use folio_contact::error::Result;

/// Run the config command
pub fn run_config() -> Result<()> {
    match RelayConfig::from_env() {
        Ok(config) => {
            println!("{}", "Relay configuration".emphasis());
            println!(
                "  Endpoint:   {}",
                hyperlink_url(Stream::Stdout, config.endpoint.as_str()).accent()
            );
            println!("  Timeout:    {}s", config.timeout.as_secs());
            println!("  Access key: {} set ({})", check(), config.access_key.muted());
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", cross(), e.to_string().error());
            eprintln!();
            print_setup();
            Err(e)
        }
    }
}

fn print_setup() {
    eprintln!("Relay Setup");
    eprintln!("===========");
    eprintln!();
    eprintln!("Required:");
    eprintln!("  {ACCESS_KEY_VAR} (or {LEGACY_ACCESS_KEY_VAR}) - relay access key");
    eprintln!();
    eprintln!("Optional:");
    eprintln!("  {RELAY_URL_VAR} - endpoint (default {DEFAULT_RELAY_URL})");
    eprintln!("  {RELAY_TIMEOUT_VAR} - seconds before giving up (default {DEFAULT_TIMEOUT_SECS})");
}
