use clap::ArgMatches;
use tracing::{error, info};

use garage_core::{FieldEdit, LoadPhase, Route, SubmitOutcome};

use super::helpers::{build_app, parse_id, print_notification, print_saved};
use super::submit_error;

pub(crate) async fn handle_edit_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let id = parse_id(matches)?;
    let model = matches.get_one::<String>("model");
    let year = matches.get_one::<String>("year");
    let running = matches.get_one::<bool>("running").copied();

    if model.is_none() && year.is_none() && running.is_none() {
        eprintln!("Nothing to change. Pass --model, --year or --running.");
        return Err("No fields to edit".into());
    }

    info!(event = "cli.edit_started", id = %id);

    let mut app = build_app(matches)?;
    app.navigate(Route::Edit(id)).await;

    // Edits are applied on top of the fetched record; a failed fetch would
    // turn this into an overwrite with defaults.
    if app.form_view().map(|f| f.phase()) != Some(LoadPhase::Loaded) {
        print_notification(app.shell());
        error!(event = "cli.edit_failed", id = %id, stage = "fetch");
        return Err(format!("Failed to fetch car '{}'", id).into());
    }

    if let Some(model) = model {
        app.edit_field(FieldEdit::Model(model.clone()));
    }
    if let Some(year) = year {
        super::apply_year_text(&mut app, year)?;
    }
    if let Some(running) = running {
        app.edit_field(FieldEdit::Operational(running));
    }

    match app.submit_form().await {
        Some(SubmitOutcome::Saved { .. }) => {
            print_saved(&app);
            println!("   Car {} updated", id);
            info!(event = "cli.edit_completed", id = %id);
            Ok(())
        }
        _ => {
            error!(event = "cli.edit_failed", id = %id, stage = "submit");
            Err(submit_error(&app, "Failed to update car"))
        }
    }
}
