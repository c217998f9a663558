use crate::cli::opts::*;

use anyhow::{Context, Result};
use flashgen_api::validation::BODY_FIELD;
use flashgen_api::{
    ApiErrorCode, ApiErrorResponse, ApiMeta, ApiSuccessResponse, ChangePasswordCommand,
    CommitAiGenerationCommand, CreateAiGenerationCommand, CreateCardCommand, CreateDeckCommand,
    DeleteAccountCommand, ResendVerificationCommand, SignInCommand, SignUpCommand,
    Normalize, UpdateCardCommand, UpdateDeckCommand, Validate,
};
use flashgen_core::CoreError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::io::{stdin, stdout, Read, Write};
use std::path::Path;
use std::process::ExitCode;

pub fn run_cli(args: Cli) -> Result<ExitCode> {
    let meta = match &args.request_id {
        Some(id) => ApiMeta::new(id.clone()),
        None => ApiMeta::generate(),
    };
    match &args.cmd {
        Command::Check(cmd) => {
            let raw = read_input(&cmd.path)?;
            let accepted = match check_model(cmd.model, &raw) {
                Ok(data) => {
                    tracing::info!(model = ?cmd.model, request_id = %meta.request_id, "body accepted");
                    print_json(&ApiSuccessResponse::new(data, meta), args.compact)?;
                    true
                }
                Err(err) => {
                    tracing::warn!(model = ?cmd.model, request_id = %meta.request_id, error = %err, "body rejected");
                    let resp: ApiErrorResponse = ApiErrorResponse::from_core(&err, meta);
                    print_json(&resp, args.compact)?;
                    false
                }
            };
            Ok(if accepted { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        Command::Codes { csv } => {
            if *csv { write_codes_csv(stdout())?; } else { write_codes_table(stdout())?; }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Parse and validate `raw` as `model`. The success payload echoes the
/// normalized body with passwords masked; commits report their tally instead.
pub fn check_model(model: Model, raw: &str) -> Result<Value, CoreError> {
    match model {
        Model::SignUp => echo(parse::<SignUpCommand>(raw)?),
        Model::SignIn => echo(parse::<SignInCommand>(raw)?),
        Model::ResendVerification => echo(parse::<ResendVerificationCommand>(raw)?),
        Model::ChangePassword => echo(parse::<ChangePasswordCommand>(raw)?),
        Model::DeleteAccount => echo(parse::<DeleteAccountCommand>(raw)?),
        Model::CreateDeck => echo(parse::<CreateDeckCommand>(raw)?),
        Model::UpdateDeck => echo(parse::<UpdateDeckCommand>(raw)?),
        Model::CreateCard => echo(parse::<CreateCardCommand>(raw)?),
        Model::UpdateCard => echo(parse::<UpdateCardCommand>(raw)?),
        Model::CreateGeneration => echo(parse::<CreateAiGenerationCommand>(raw)?),
        Model::CommitGeneration => echo(parse::<CommitAiGenerationCommand>(raw)?.counts()),
    }
}

fn parse<C: DeserializeOwned + Validate + Normalize>(raw: &str) -> Result<C, CoreError> {
    let cmd: C = serde_json::from_str(raw).map_err(|e| CoreError::field(BODY_FIELD, e.to_string()))?;
    tracing::debug!("body parsed");
    cmd.validate()?;
    Ok(cmd.normalize())
}

fn echo<T: Serialize>(value: T) -> Result<Value, CoreError> {
    let mut v = serde_json::to_value(value).map_err(|e| CoreError::Internal(e.to_string()))?;
    mask_passwords(&mut v);
    Ok(v)
}

/// Replaces the value of every key containing "password".
fn mask_passwords(v: &mut Value) {
    match v {
        Value::Object(map) => {
            for (k, val) in map.iter_mut() {
                if k.to_lowercase().contains("password") { *val = Value::String("***".into()); } else { mask_passwords(val); }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(mask_passwords),
        _ => {}
    }
}

fn read_input(path: &Path) -> Result<String> {
    let mut s = String::new();
    if path == Path::new("-") {
        stdin().read_to_string(&mut s).context("reading stdin")?;
    } else {
        s = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    }
    Ok(s)
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let s = if compact { serde_json::to_string(value)? } else { serde_json::to_string_pretty(value)? };
    println!("{s}");
    Ok(())
}

#[derive(Serialize)]
struct CodeRecord {
    code: &'static str,
    status: u16,
    message: &'static str,
}

fn code_records() -> Vec<CodeRecord> {
    ApiErrorCode::ALL
        .iter()
        .map(|c| CodeRecord { code: c.as_str(), status: c.status().as_u16(), message: c.default_message() })
        .collect()
}

pub fn write_codes_csv<W: Write>(out: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    for rec in code_records() { wtr.serialize(rec)?; }
    wtr.flush()?;
    Ok(())
}

pub fn write_codes_table<W: Write>(mut out: W) -> Result<()> {
    let records = code_records();
    let width = records.iter().map(|r| r.code.len()).max().unwrap_or(0);
    for r in records {
        writeln!(out, "{:<width$}  {}  {}", r.code, r.status, r.message)?;
    }
    Ok(())
}
