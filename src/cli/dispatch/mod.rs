use crate::cli::{actions::Action, globals::GlobalArgs};
use anyhow::{Context, Result};
use secrecy::SecretString;

pub fn handler(matches: &clap::ArgMatches) -> Result<(Action, GlobalArgs)> {
    let dsn = matches
        .get_one::<String>("dsn")
        .cloned()
        .context("missing required argument: --dsn")?;

    let db_username = matches
        .get_one::<String>("db-user")
        .cloned()
        .context("missing required argument: --db-user")?;

    let db_password = matches
        .get_one::<String>("db-password")
        .cloned()
        .map(SecretString::from)
        .context("missing required argument: --db-password")?;

    let globals = GlobalArgs::new(db_username, db_password);

    let action = if matches.get_flag("console") {
        Action::Console { dsn }
    } else {
        Action::Server {
            port: matches.get_one::<u16>("port").copied().unwrap_or(8080),
            dsn,
        }
    };

    Ok((action, globals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;
    use secrecy::ExposeSecret;

    fn matches(extra: &[&str]) -> clap::ArgMatches {
        let mut args = vec![
            "pordego",
            "--port",
            "8080",
            "--dsn",
            "postgres://localhost:5432/pordego",
            "--db-user",
            "customer_api",
            "--db-password",
            "hunter2",
        ];
        args.extend_from_slice(extra);
        commands::new().get_matches_from(args)
    }

    #[test]
    fn test_server_action_by_default() {
        let (action, globals) = handler(&matches(&[])).unwrap();

        match action {
            Action::Server { port, dsn } => {
                assert_eq!(port, 8080);
                assert_eq!(dsn, "postgres://localhost:5432/pordego");
            }
            Action::Console { .. } => panic!("expected server action"),
        }

        assert_eq!(globals.db_username, "customer_api");
        assert_eq!(globals.db_password.expose_secret(), "hunter2");
    }

    #[test]
    fn test_console_action() {
        let (action, _) = handler(&matches(&["--console"])).unwrap();

        match action {
            Action::Console { dsn } => {
                assert_eq!(dsn, "postgres://localhost:5432/pordego");
            }
            Action::Server { .. } => panic!("expected console action"),
        }
    }
}
