use clap::ArgMatches;
use tracing::error;

use garage_core::{App, HttpGateway, events};

pub mod helpers;

mod add;
mod completions;
mod delete;
mod edit;
mod list;
mod open;
mod show;

pub async fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let result = match matches.subcommand() {
        Some(("list", sub_matches)) => list::handle_list_command(sub_matches).await,
        Some(("show", sub_matches)) => show::handle_show_command(sub_matches).await,
        Some(("add", sub_matches)) => add::handle_add_command(sub_matches).await,
        Some(("edit", sub_matches)) => edit::handle_edit_command(sub_matches).await,
        Some(("delete", sub_matches)) => delete::handle_delete_command(sub_matches).await,
        Some(("open", sub_matches)) => open::handle_open_command(sub_matches).await,
        Some(("completions", sub_matches)) => {
            completions::handle_completions_command(sub_matches)
        }
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    };

    if let Err(e) = &result {
        events::log_app_error(&**e);
    }
    events::log_app_shutdown();
    result
}

/// Parse the year through the form so bad input is rejected before submit.
fn apply_year_text(
    app: &mut App<HttpGateway>,
    text: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let form = app.form_view_mut().ok_or("Form view not active")?;
    form.set_year_text(text).map_err(|e| {
        eprintln!("❌ {}", e);
        e.into()
    })
}

/// Report a failed submit and build the command error.
fn submit_error(app: &App<HttpGateway>, message: &str) -> Box<dyn std::error::Error> {
    helpers::print_notification(app.shell());
    if let Some(inline) = app.form_view().and_then(|f| f.error_text()) {
        eprintln!("   {}", inline);
    }
    message.into()
}
