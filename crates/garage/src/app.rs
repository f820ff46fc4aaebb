use clap::{Arg, ArgAction, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("garage")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Browse, add, edit and delete car records on a REST backend")
        .long_about("garage is a client for a car-record REST service. Every record has a make/model name, a production year and an operational flag. Records can be listed with a filter on the operational flag, created, edited and deleted.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .help("Base URL of the backend (overrides config)")
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("list")
                .about("List car records")
                .arg(
                    Arg::new("filter")
                        .long("filter")
                        .short('f')
                        .help("Filter on the operational flag")
                        .value_parser(["all", "true", "false"])
                        .default_value("all")
                )
                .arg(
                    Arg::new("skip")
                        .long("skip")
                        .help("Number of records to skip")
                        .value_parser(value_parser!(u32))
                )
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .help("Maximum number of records to return")
                        .value_parser(value_parser!(u32))
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("show")
                .about("Show a single car record")
                .arg(
                    Arg::new("id")
                        .help("Record id")
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("add")
                .about("Create a new car record")
                .arg(
                    Arg::new("model")
                        .long("model")
                        .short('m')
                        .help("Make and model, e.g. \"Fiat 126p\"")
                        .required(true)
                )
                .arg(
                    Arg::new("year")
                        .long("year")
                        .short('y')
                        .help("Production year")
                        .required(true)
                        .allow_hyphen_values(true)
                )
                .arg(
                    Arg::new("not-running")
                        .long("not-running")
                        .help("Mark the car as not operational (default: operational)")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("edit")
                .about("Edit an existing car record; omitted fields keep their current value")
                .arg(
                    Arg::new("id")
                        .help("Record id")
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("model")
                        .long("model")
                        .short('m')
                        .help("New make and model")
                )
                .arg(
                    Arg::new("year")
                        .long("year")
                        .short('y')
                        .help("New production year")
                        .allow_hyphen_values(true)
                )
                .arg(
                    Arg::new("running")
                        .long("running")
                        .help("New operational flag")
                        .value_parser(value_parser!(bool))
                )
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a car record")
                .arg(
                    Arg::new("id")
                        .help("Record id")
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .short('y')
                        .help("Skip the confirmation prompt")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("open")
                .about("Render the view at a client path: /, /add or /edit/<id>")
                .arg(
                    Arg::new("path")
                        .help("Client path")
                        .required(true)
                        .index(1)
                )
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .help("Target shell")
                        .required(true)
                        .index(1)
                        .value_parser(value_parser!(clap_complete::Shell))
                )
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_build() {
        let app = build_cli();
        assert_eq!(app.get_name(), "garage");
    }

    #[test]
    fn test_cli_verify() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_cli_list_defaults_to_all() {
        let matches = build_cli().try_get_matches_from(vec!["garage", "list"]).unwrap();
        let list = matches.subcommand_matches("list").unwrap();
        assert_eq!(list.get_one::<String>("filter").unwrap(), "all");
        assert!(list.get_one::<u32>("skip").is_none());
        assert!(!list.get_flag("json"));
    }

    #[test]
    fn test_cli_list_with_filter_and_paging() {
        let matches = build_cli()
            .try_get_matches_from(vec![
                "garage", "list", "--filter", "false", "--skip", "5", "--limit", "10",
            ])
            .unwrap();
        let list = matches.subcommand_matches("list").unwrap();
        assert_eq!(list.get_one::<String>("filter").unwrap(), "false");
        assert_eq!(list.get_one::<u32>("skip"), Some(&5));
        assert_eq!(list.get_one::<u32>("limit"), Some(&10));
    }

    #[test]
    fn test_cli_list_rejects_unknown_filter() {
        let matches = build_cli().try_get_matches_from(vec!["garage", "list", "--filter", "yes"]);
        assert!(matches.is_err());
    }

    #[test]
    fn test_cli_add_requires_model_and_year() {
        assert!(
            build_cli()
                .try_get_matches_from(vec!["garage", "add", "--model", "Fiat 126p"])
                .is_err()
        );

        let matches = build_cli()
            .try_get_matches_from(vec![
                "garage",
                "add",
                "--model",
                "Fiat 126p",
                "--year",
                "1973",
                "--not-running",
            ])
            .unwrap();
        let add = matches.subcommand_matches("add").unwrap();
        assert_eq!(add.get_one::<String>("model").unwrap(), "Fiat 126p");
        assert_eq!(add.get_one::<String>("year").unwrap(), "1973");
        assert!(add.get_flag("not-running"));
    }

    #[test]
    fn test_cli_edit_fields_are_optional() {
        let matches = build_cli()
            .try_get_matches_from(vec!["garage", "edit", "5", "--running", "false"])
            .unwrap();
        let edit = matches.subcommand_matches("edit").unwrap();
        assert_eq!(edit.get_one::<String>("id").unwrap(), "5");
        assert_eq!(edit.get_one::<bool>("running"), Some(&false));
        assert!(edit.get_one::<String>("model").is_none());
    }

    #[test]
    fn test_cli_delete_yes_flag() {
        let matches = build_cli()
            .try_get_matches_from(vec!["garage", "delete", "3", "--yes"])
            .unwrap();
        let delete = matches.subcommand_matches("delete").unwrap();
        assert!(delete.get_flag("yes"));
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let matches = build_cli()
            .try_get_matches_from(vec![
                "garage",
                "open",
                "/add",
                "-v",
                "--api-url",
                "http://cars.local",
            ])
            .unwrap();
        assert!(matches.get_flag("verbose"));
        assert_eq!(
            matches.get_one::<String>("api-url").unwrap(),
            "http://cars.local"
        );
    }

    #[test]
    fn test_cli_completions_requires_known_shell() {
        assert!(
            build_cli()
                .try_get_matches_from(vec!["garage", "completions", "bash"])
                .is_ok()
        );
        assert!(
            build_cli()
                .try_get_matches_from(vec!["garage", "completions", "cmd.exe"])
                .is_err()
        );
    }
}
