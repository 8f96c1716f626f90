use crate::cli::{
    actions::{server::with_credentials, Action},
    globals::GlobalArgs,
};
use crate::pordego::{
    account::{self, SignUp},
    store::CustomerStore,
    validate::{validate_email, validate_password},
};
use anyhow::{anyhow, Result};
use sqlx::postgres::PgPoolOptions;
use std::io::{self, BufRead, Write};

/// Handle the console action: the interactive sign in/up flow
pub async fn handle(action: Action, globals: &GlobalArgs) -> Result<()> {
    let Action::Console { dsn } = action else {
        return Err(anyhow!("not a console action"));
    };

    let dsn = with_credentials(&dsn, globals)?;

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&dsn)
        .await?;

    let store = CustomerStore::new(pool);
    store.ensure_schema().await?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    run(&store, &mut input, &mut output).await
}

async fn run<R: BufRead, W: Write>(store: &CustomerStore, input: &mut R, output: &mut W) -> Result<()> {
    let choice = prompt(input, output, "Sign in or up? [i/u]: ")?;

    match choice.as_str() {
        "i" => sign_in(store, input, output).await,
        "u" => sign_up(store, input, output).await,
        other => {
            writeln!(output, "Unknown choice: {other}")?;

            Ok(())
        }
    }
}

async fn sign_up<R: BufRead, W: Write>(
    store: &CustomerStore,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let email = prompt(input, output, "Enter your email: ")?;
    let password = prompt(input, output, "Enter your password: ")?;

    let (email, password) = read_valid_credentials(input, output, email, password)?;

    match account::sign_up(store, &email, &password).await? {
        SignUp::Created => writeln!(output, "Registration successful")?,
        SignUp::Duplicate => writeln!(output, "Email already registered")?,
        // the loop above only exits with valid credentials
        SignUp::Rejected(reason) => writeln!(output, "{reason}")?,
    }

    Ok(())
}

async fn sign_in<R: BufRead, W: Write>(
    store: &CustomerStore,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let email = prompt(input, output, "Enter your email: ")?;
    let password = prompt(input, output, "Enter your password: ")?;

    if account::sign_in(store, &email, &password).await? {
        writeln!(output, "Login successful")?;
    } else {
        writeln!(output, "Invalid email or password")?;
    }

    Ok(())
}

/// Re-solicit the failing field until both validators pass
fn read_valid_credentials<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    mut email: String,
    mut password: String,
) -> Result<(String, String)> {
    loop {
        let (email_ok, email_reason) = validate_email(&email);
        let (password_ok, password_reason) = validate_password(&password);

        if email_ok && password_ok {
            return Ok((email, password));
        }

        if !email_ok {
            writeln!(output, "\n{email_reason}")?;
            email = prompt(input, output, "Enter your email: ")?;
        }

        if !password_ok {
            writeln!(output, "\n{password_reason}")?;
            password = prompt(input, output, "Enter your password: ")?;
        }
    }
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<String> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
