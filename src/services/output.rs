use crate::domain::models::{ErrorBody, JsonErr, JsonOut};
use serde::Serialize;

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    text: impl Fn(&T) -> Vec<String>,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for line in text(&data) {
            println!("{}", line);
        }
    }
    Ok(())
}

/// Error envelope goes to stdout in JSON mode; plain diagnostics go to stderr.
pub fn print_err(json: bool, code: &'static str, message: String) {
    if json {
        let body = JsonErr {
            ok: false,
            error: ErrorBody { code, message },
        };
        match serde_json::to_string_pretty(&body) {
            Ok(s) => println!("{}", s),
            Err(_) => eprintln!("Error: {}", body.error.message),
        }
    } else {
        eprintln!("Error: {}", message);
    }
}
