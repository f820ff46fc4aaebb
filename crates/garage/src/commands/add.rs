use clap::ArgMatches;
use tracing::{error, info};

use garage_core::{FieldEdit, Route, SubmitOutcome};

use super::helpers::{build_app, print_saved};
use super::submit_error;

pub(crate) async fn handle_add_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let model = matches
        .get_one::<String>("model")
        .ok_or("Model argument is required")?;
    let year = matches
        .get_one::<String>("year")
        .ok_or("Year argument is required")?;
    let operational = !matches.get_flag("not-running");

    info!(event = "cli.add_started", model = model, year = year);

    let mut app = build_app(matches)?;
    app.navigate(Route::Add).await;

    app.edit_field(FieldEdit::Model(model.clone()));
    app.edit_field(FieldEdit::Operational(operational));
    super::apply_year_text(&mut app, year)?;

    match app.submit_form().await {
        Some(SubmitOutcome::Saved { record, .. }) => {
            print_saved(&app);
            if let Some(record) = record {
                println!("   Car {} created: {}", record.id, record.model());
                info!(event = "cli.add_completed", id = %record.id);
            }
            Ok(())
        }
        _ => {
            error!(event = "cli.add_failed", model = model);
            Err(submit_error(&app, "Failed to create car"))
        }
    }
}
