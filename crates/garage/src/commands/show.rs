use clap::ArgMatches;
use tracing::{error, info};

use garage_core::{LoadPhase, Route};
use garage_protocol::CarRecord;

use super::helpers::{build_app, parse_id, print_notification};

pub(crate) async fn handle_show_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let id = parse_id(matches)?;
    let json_output = matches.get_flag("json");

    info!(event = "cli.show_started", id = %id);

    let mut app = build_app(matches)?;
    app.navigate(Route::Edit(id)).await;

    let form = app.form_view().ok_or("Form view not active")?;
    if form.phase() == LoadPhase::Failed {
        print_notification(app.shell());
        if let Some(detail) = form.error() {
            eprintln!("   {}", detail);
        }
        error!(event = "cli.show_failed", id = %id);
        return Err(format!("Failed to fetch car '{}'", id).into());
    }

    let record = CarRecord::new(id, form.fields().clone());
    if json_output {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("Car {}:", record.id);
        println!("  Marka/model: {}", record.model());
        println!("  Rok:         {}", record.year());
        println!(
            "  Na chodzie:  {}",
            if record.operational() { "Tak" } else { "Nie" }
        );
    }

    info!(event = "cli.show_completed", id = %id);
    Ok(())
}
