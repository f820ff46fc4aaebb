use std::io::{self, Write};

use clap::ArgMatches;
use tracing::{error, info};

use garage_core::views::messages::CONFIRM_DELETE;

use super::helpers::{build_app, is_confirmation_accepted, parse_id, print_notification};

pub(crate) async fn handle_delete_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let id = parse_id(matches)?;
    let skip_prompt = matches.get_flag("yes");

    info!(event = "cli.delete_started", id = %id, skip_prompt = skip_prompt);

    let mut app = build_app(matches)?;
    app.request_delete(id);

    if !skip_prompt {
        print!("{} (id {}) [y/N] ", CONFIRM_DELETE, id);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !is_confirmation_accepted(&input) {
            app.cancel_delete();
            println!("Aborted.");
            info!(event = "cli.delete_aborted", id = %id);
            return Ok(());
        }
    }

    if app.confirm_delete().await {
        print_notification(app.shell());
        let remaining = app.list_view().map(|l| l.cars().len()).unwrap_or_default();
        println!("   Car {} deleted, {} remaining", id, remaining);
        info!(event = "cli.delete_completed", id = %id);
        Ok(())
    } else {
        print_notification(app.shell());
        error!(event = "cli.delete_failed", id = %id);
        Err(format!("Failed to delete car '{}'", id).into())
    }
}
