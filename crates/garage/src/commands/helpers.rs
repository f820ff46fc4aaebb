use clap::ArgMatches;
use tracing::{error, warn};

use garage_core::views::messages;
use garage_core::{App, GarageConfig, HttpGateway, LoadPhase, Shell};
use garage_protocol::CarId;

/// Load config, falling back to defaults with a warning if loading fails.
pub fn load_config_with_warning() -> GarageConfig {
    match GarageConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.garage/config.toml and ./.garage/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            GarageConfig::default()
        }
    }
}

/// Build the app from config plus the global `--api-url` override.
pub fn build_app(matches: &ArgMatches) -> Result<App<HttpGateway>, Box<dyn std::error::Error>> {
    let mut config = load_config_with_warning();

    if let Some(url) = matches.get_one::<String>("api-url") {
        config.api.base_url = Some(url.clone());
        if let Err(e) = config.validate() {
            eprintln!("❌ {}", e);
            error!(event = "cli.config.override_invalid", url = url, error = %e);
            return Err(e.into());
        }
    }

    Ok(App::from_config(&config)?)
}

pub fn parse_id(matches: &ArgMatches) -> Result<CarId, Box<dyn std::error::Error>> {
    let raw = matches
        .get_one::<String>("id")
        .ok_or("Id argument is required")?;
    raw.parse::<CarId>().map_err(|e| {
        eprintln!("❌ {}", e);
        e.into()
    })
}

/// Print the shell's current notification: success on stdout, errors on stderr.
pub fn print_notification(shell: &Shell) {
    if let Some(notification) = shell.notification() {
        if notification.is_error {
            eprintln!("❌ {}: {}", notification.headline(), notification.message);
        } else {
            println!("✅ {}: {}", notification.headline(), notification.message);
        }
    }
}

/// Report a successful save.
///
/// Saving moves the app to the list and reloads it. When that reload fails
/// its error replaces the save notification, so the save is reported
/// separately and the refresh failure as a warning.
pub fn print_saved(app: &App<HttpGateway>) {
    let refresh_failed = app
        .list_view()
        .is_some_and(|list| list.phase() == LoadPhase::Failed);

    if refresh_failed {
        println!("✅ {}", messages::SAVED);
        eprintln!(
            "⚠️  Saved, but the car list could not be refreshed ({}).",
            messages::LOAD_FAILED
        );
        warn!(event = "cli.refresh_after_save_failed");
    } else {
        print_notification(app.shell());
    }
}

pub fn is_confirmation_accepted(input: &str) -> bool {
    let normalized = input.trim().to_lowercase();
    normalized == "y" || normalized == "yes" || normalized == "t" || normalized == "tak"
}
