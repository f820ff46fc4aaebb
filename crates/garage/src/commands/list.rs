use clap::ArgMatches;
use tracing::{error, info};

use garage_core::LoadPhase;
use garage_protocol::{CarFilter, ListQuery};

use super::helpers::{build_app, print_notification};
use crate::table::TableFormatter;

pub(crate) async fn handle_list_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter: CarFilter = matches
        .get_one::<String>("filter")
        .map(|f| f.parse::<CarFilter>())
        .transpose()?
        .unwrap_or_default();
    let query = ListQuery::filtered(filter)
        .with_skip(matches.get_one::<u32>("skip").copied())
        .with_limit(matches.get_one::<u32>("limit").copied());
    let json_output = matches.get_flag("json");

    info!(
        event = "cli.list_started",
        filter = %filter,
        json_output = json_output
    );

    let mut app = build_app(matches)?;
    app.show_list(query).await;

    let list = app.list_view().ok_or("List view not active")?;
    if list.phase() == LoadPhase::Failed {
        print_notification(app.shell());
        error!(event = "cli.list_failed", filter = %filter);
        return Err("Failed to list cars".into());
    }

    if json_output {
        println!("{}", serde_json::to_string_pretty(list.cars())?);
    } else {
        let tiles = list.tiles();
        if tiles.is_empty() {
            println!("No cars found ({}).", filter.label());
        } else {
            println!("Cars - {}:", filter.label());
            TableFormatter::new(&tiles).print_table(&tiles);
        }
    }

    info!(
        event = "cli.list_completed",
        count = list.cars().len()
    );
    Ok(())
}
