use std::{io::Write, process::ExitCode};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use form_core::{Confirmation, FormAction, FormController, FormFields};
use shared::{domain::Account, error::Notice};
use storage::{
    config::{load_settings, prepare_database_url},
    AccountStore, Storage,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Scripted maintenance of bank desk account records")]
struct Cli {
    /// Overrides bank_desk.toml and the DATABASE_URL environment variables.
    #[arg(long)]
    database_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Create {
        account_number: String,
        #[arg(long)]
        name: String,
        /// YYYY-MM-DD
        #[arg(long)]
        dob: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long)]
        balance: String,
        /// Free-text notes placed under the creation header.
        #[arg(long, default_value = "")]
        notes: String,
    },
    Fetch {
        account_number: String,
        #[arg(long)]
        json: bool,
    },
    Update {
        account_number: String,
        #[command(flatten)]
        edits: FieldEdits,
    },
    Delete {
        account_number: String,
        /// Required to actually delete.
        #[arg(long)]
        yes: bool,
    },
}

/// Field overrides for `update`; anything left unset keeps its stored value.
#[derive(Args, Debug, Default)]
struct FieldEdits {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    dob: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    balance: Option<String>,
    /// Replaces the whole transaction history.
    #[arg(long, conflicts_with = "append_history")]
    history: Option<String>,
    /// Appends one line to the existing transaction history.
    #[arg(long)]
    append_history: Option<String>,
}

impl FieldEdits {
    fn apply(self, fields: &mut FormFields) {
        if let Some(name) = self.name {
            fields.full_name = name;
        }
        if let Some(dob) = self.dob {
            fields.date_of_birth = dob;
        }
        if let Some(phone) = self.phone {
            fields.phone_number = phone;
        }
        if let Some(balance) = self.balance {
            fields.balance = balance;
        }
        if let Some(history) = self.history {
            fields.transaction_history = history;
        }
        if let Some(line) = self.append_history {
            append_history_line(&mut fields.transaction_history, &line);
        }
    }
}

fn append_history_line(history: &mut String, line: &str) {
    if !history.is_empty() && !history.ends_with('\n') {
        history.push('\n');
    }
    history.push_str(line);
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let raw_database_url = match cli.database_url {
        Some(url) => url,
        None => load_settings()?.database_url,
    };
    let database_url = prepare_database_url(&raw_database_url)?;
    let storage = Storage::new(&database_url)
        .await
        .with_context(|| format!("failed to open account store at '{database_url}'"))?;
    let mut form = FormController::new(storage);

    let notice = run(&mut form, cli.command, &mut std::io::stdout().lock()).await?;
    Ok(report(&notice))
}

/// Runs one subcommand against the form and returns the notice that decides
/// the exit status. Fetched records are written to `out`.
async fn run<S: AccountStore>(
    form: &mut FormController<S>,
    command: Command,
    out: &mut impl Write,
) -> Result<Notice> {
    let notice = match command {
        Command::Create {
            account_number,
            name,
            dob,
            phone,
            balance,
            notes,
        } => {
            let fields = form.fields_mut();
            fields.account_number = account_number;
            fields.full_name = name;
            fields.date_of_birth = dob;
            fields.phone_number = phone;
            fields.balance = balance;
            fields.transaction_history = notes;
            form.dispatch(FormAction::Create, &mut Confirmation::No).await
        }
        Command::Fetch {
            account_number,
            json,
        } => {
            let notice = load(form, account_number).await;
            if notice.kind.is_success() {
                if json {
                    let account = loaded_account(form)?;
                    writeln!(out, "{}", serde_json::to_string_pretty(&account)?)?;
                } else {
                    print_fields(form.fields(), out)?;
                }
            }
            notice
        }
        Command::Update {
            account_number,
            edits,
        } => {
            let notice = load(form, account_number).await;
            if !notice.kind.is_success() {
                return Ok(notice);
            }
            edits.apply(form.fields_mut());
            form.dispatch(FormAction::Update, &mut Confirmation::No).await
        }
        Command::Delete {
            account_number,
            yes,
        } => {
            let notice = load(form, account_number).await;
            if !notice.kind.is_success() {
                return Ok(notice);
            }
            form.dispatch(FormAction::Delete, &mut delete_confirmation(yes)).await
        }
    };
    Ok(notice)
}

async fn load<S: AccountStore>(form: &mut FormController<S>, account_number: String) -> Notice {
    form.fields_mut().account_number = account_number;
    form.dispatch(FormAction::Fetch, &mut Confirmation::No).await
}

/// Without `--yes` the delete is declined, so nothing is removed.
fn delete_confirmation(yes: bool) -> Confirmation {
    if yes {
        Confirmation::Yes
    } else {
        Confirmation::No
    }
}

fn loaded_account<S: AccountStore>(form: &FormController<S>) -> Result<Account> {
    let fields = form.fields();
    Ok(Account {
        account_number: fields.account_number()?,
        details: fields.details()?,
    })
}

fn print_fields(fields: &FormFields, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "Account Number: {}", fields.account_number)?;
    writeln!(out, "Full Name:      {}", fields.full_name)?;
    writeln!(out, "Date of Birth:  {}", fields.date_of_birth)?;
    writeln!(out, "Phone Number:   {}", fields.phone_number)?;
    writeln!(out, "Balance:        {}", fields.balance)?;
    writeln!(out, "Transaction History:")?;
    writeln!(out, "{}", fields.transaction_history)
}

fn report(notice: &Notice) -> ExitCode {
    if notice.kind.is_success() {
        eprintln!("{}", notice.message);
    } else {
        eprintln!("{}: {}", notice.title, notice.message);
    }
    ExitCode::from(exit_status(notice))
}

/// Zero only for a successful notice.
fn exit_status(notice: &Notice) -> u8 {
    if notice.kind.is_success() {
        0
    } else {
        1
    }
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
