use clap::ArgMatches;
use tracing::{error, info};

use garage_core::{ActiveView, FormView, ListView, LoadPhase, Route};

use super::helpers::{build_app, print_notification};
use crate::table::TableFormatter;

pub(crate) async fn handle_open_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = matches
        .get_one::<String>("path")
        .ok_or("Path argument is required")?;

    let route: Route = match path.parse() {
        Ok(route) => route,
        Err(e) => {
            eprintln!("❌ {}", e);
            error!(event = "cli.open_invalid_path", path = path, error = %e);
            return Err(e.into());
        }
    };

    info!(event = "cli.open_started", route = %route);

    let mut app = build_app(matches)?;
    app.navigate(route).await;

    let failed = match app.view() {
        ActiveView::List(list) => {
            render_list(list);
            list.phase() == LoadPhase::Failed
        }
        ActiveView::Form(form) => {
            render_form(form);
            form.phase() == LoadPhase::Failed
        }
    };
    print_notification(app.shell());

    if failed {
        error!(event = "cli.open_failed", route = %route);
        return Err(format!("Failed to load view '{}'", route).into());
    }

    info!(event = "cli.open_completed", route = %route);
    Ok(())
}

fn render_list(list: &ListView) {
    println!("Filtr: {}", list.filter().label());
    let tiles = list.tiles();
    TableFormatter::new(&tiles).print_table(&tiles);
}

fn render_form(form: &FormView) {
    let fields = form.fields();
    println!("{}", form.title());
    println!("  Marka/model: {}", fields.model);
    println!("  Rok:         {}", fields.year);
    println!(
        "  Na chodzie:  [{}]",
        if fields.operational { "x" } else { " " }
    );
    if let Some(error) = form.error_text() {
        println!("  {}", error);
    }
}
