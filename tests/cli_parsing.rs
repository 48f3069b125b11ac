use clap::Parser;
use linear_context::cli::{Cli, Commands, ContextCommands};

#[test]
fn test_parse_connect_with_key() {
    let cli = temp_env::with_var_unset("LINEAR_API_KEY", || {
        Cli::try_parse_from(["linear-context", "connect", "lin_api_k", "--verify"]).unwrap()
    });

    match cli.command {
        Commands::Connect(args) => {
            assert_eq!(args.api_key.as_deref(), Some("lin_api_k"));
            assert!(args.verify);
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_connect_key_from_env() {
    let cli = temp_env::with_var("LINEAR_API_KEY", Some("lin_api_env"), || {
        Cli::try_parse_from(["linear-context", "connect"]).unwrap()
    });

    match cli.command {
        Commands::Connect(args) => assert_eq!(args.api_key.as_deref(), Some("lin_api_env")),
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_connect_without_key() {
    let cli = temp_env::with_var_unset("LINEAR_API_KEY", || {
        Cli::try_parse_from(["linear-context", "connect"]).unwrap()
    });

    match cli.command {
        Commands::Connect(args) => assert!(args.api_key.is_none()),
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_issues_select_with_global_json() {
    let cli = Cli::try_parse_from(["linear-context", "issues", "--select", "ENG-4", "--json"]).unwrap();

    assert!(cli.json);
    match cli.command {
        Commands::Issues(args) => assert_eq!(args.select.as_deref(), Some("ENG-4")),
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_context_subcommands() {
    let cli = Cli::try_parse_from(["linear-context", "context", "set", "ENG-1"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Context(ContextCommands::Set { ref identifier }) if identifier == "ENG-1"
    ));

    let cli = Cli::try_parse_from(["linear-context", "context", "status", "In Progress"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Context(ContextCommands::Status { ref state }) if state == "In Progress"
    ));

    let cli = Cli::try_parse_from(["linear-context", "context", "comment", "Done here"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Context(ContextCommands::Comment { ref body }) if body == "Done here"
    ));

    let cli = Cli::try_parse_from(["linear-context", "context", "show"]).unwrap();
    assert!(matches!(cli.command, Commands::Context(ContextCommands::Show)));
}

#[test]
fn test_parse_create_full() {
    let cli = Cli::try_parse_from([
        "linear-context",
        "create",
        "--title",
        "Fix login",
        "--team",
        "ENG",
        "-d",
        "Steps",
        "-a",
        "me",
        "-s",
        "Todo",
        "-e",
        "3",
        "-p",
        "High",
        "--start",
    ])
    .unwrap();

    match cli.command {
        Commands::Create(args) => {
            assert_eq!(args.title, "Fix login");
            assert_eq!(args.team, "ENG");
            assert_eq!(args.description.as_deref(), Some("Steps"));
            assert_eq!(args.assignee.as_deref(), Some("me"));
            assert_eq!(args.state.as_deref(), Some("Todo"));
            assert_eq!(args.estimate, Some(3));
            assert_eq!(args.priority.as_deref(), Some("High"));
            assert!(args.start);
            assert!(!args.select);
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_create_requires_title_and_team() {
    assert!(Cli::try_parse_from(["linear-context", "create", "--team", "ENG"]).is_err());
    assert!(Cli::try_parse_from(["linear-context", "create", "--title", "x"]).is_err());
}

#[test]
fn test_parse_reference_commands() {
    let cli = Cli::try_parse_from(["linear-context", "states", "--team", "ENG"]).unwrap();
    assert!(matches!(cli.command, Commands::States { team: Some(ref t) } if t == "ENG"));

    let cli = Cli::try_parse_from(["linear-context", "members", "ENG"]).unwrap();
    assert!(matches!(cli.command, Commands::Members { ref team } if team == "ENG"));

    let cli = Cli::try_parse_from(["linear-context", "-c", "alt.yaml", "teams"]).unwrap();
    assert!(matches!(cli.command, Commands::Teams));
    assert_eq!(cli.config.unwrap().to_str(), Some("alt.yaml"));
}

#[test]
fn test_parse_unknown_command_fails() {
    assert!(Cli::try_parse_from(["linear-context", "swarm"]).is_err());
}
