use mockall::mock;
use mockall::predicate::*;

use okta_cli_client::cli::commands::register::collect_input;
use okta_cli_client::cli::RegisterArgs;
use okta_cli_client::error::ErrorKind;
use okta_cli_client::interactive::mock::InputOutput;

// The automock in the library is only available to its own unit tests.
mock! {
    pub Terminal {}

    impl InputOutput for Terminal {
        fn is_interactive(&self) -> bool;
        fn println(&self, text: &str) -> Result<(), okta_cli_client::error::Error>;
        fn prompt(&self, label: &str, required: bool) -> Result<String, okta_cli_client::error::Error>;
    }
}

fn full_args() -> RegisterArgs {
    RegisterArgs {
        first_name: Some("Ada".to_string()),
        last_name: Some("Lovelace".to_string()),
        email: Some("ada@example.com".to_string()),
        country: Some("UK".to_string()),
        company: None,
        oie: true,
    }
}

#[test]
fn test_flags_never_prompt() {
    let mut terminal = MockTerminal::new();
    terminal.expect_prompt().never();
    terminal.expect_is_interactive().never();

    let input = collect_input(&full_args(), &terminal).unwrap();

    assert_eq!(input.first_name, "Ada");
    assert_eq!(input.country, "UK");
    assert_eq!(input.company, "");
    assert!(input.oie_enabled);
}

#[test]
fn test_missing_flags_are_prompted_in_order() {
    let mut terminal = MockTerminal::new();
    let mut seq = mockall::Sequence::new();
    terminal.expect_is_interactive().returning(|| true);
    terminal
        .expect_prompt()
        .with(eq("Email"), eq(true))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Ok("ada@example.com".to_string()));
    terminal
        .expect_prompt()
        .with(eq("Country"), eq(true))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Ok(" UK ".to_string()));

    let args = RegisterArgs {
        email: None,
        country: None,
        oie: false,
        ..full_args()
    };
    let input = collect_input(&args, &terminal).unwrap();

    assert_eq!(input.email, "ada@example.com");
    assert_eq!(input.country, "UK");
    assert!(!input.oie_enabled);
}

#[test]
fn test_non_interactive_missing_flag_names_it() {
    let mut terminal = MockTerminal::new();
    terminal.expect_is_interactive().returning(|| false);
    terminal.expect_prompt().never();

    let args = RegisterArgs {
        last_name: None,
        ..full_args()
    };
    let err = collect_input(&args, &terminal).unwrap_err();

    assert_eq!(err.kind(), Some(ErrorKind::Input));
    assert!(err.to_string().contains("--last-name"));
}

#[test]
fn test_empty_flag_counts_as_missing() {
    let mut terminal = MockTerminal::new();
    terminal.expect_is_interactive().returning(|| true);
    terminal
        .expect_prompt()
        .with(eq("First name"), eq(true))
        .times(1)
        .returning(|_, _| Ok("Ada".to_string()));

    let args = RegisterArgs {
        first_name: Some(String::new()),
        ..full_args()
    };
    assert_eq!(collect_input(&args, &terminal).unwrap().first_name, "Ada");
}

#[test]
fn test_interrupt_stops_collection() {
    let mut terminal = MockTerminal::new();
    terminal.expect_is_interactive().returning(|| true);
    terminal
        .expect_prompt()
        .times(1)
        .returning(|_, _| Err(okta_cli_client::error::Error::interrupted()));

    let args = RegisterArgs::default();
    let err = collect_input(&args, &terminal).unwrap_err();
    assert!(err.is_interrupted());
}

#[test]
fn test_company_is_never_prompted() {
    let mut terminal = MockTerminal::new();
    terminal.expect_is_interactive().returning(|| true);
    terminal.expect_prompt().never();

    let input = collect_input(&full_args(), &terminal).unwrap();
    assert_eq!(input.company, "");
}
