//! CLI probe for the contact-card composer.
//!
//! # Responsibility
//! - Render one contact to stdout, as plain text or as the JSON display tree,
//!   without any UI host attached.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Usage: `contactcard_cli [--json] [contact.json]`. Without a file argument
//! a built-in sample contact is rendered. Set `CONTACTCARD_LOG_DIR` to an
//! absolute path to enable file logging.

use contactcard_core::{
    compose_card, default_log_level, init_logging, render_to_text, BlankFetcher, ContactRecord,
};

const LOG_DIR_ENV: &str = "CONTACTCARD_LOG_DIR";

fn main() {
    if let Err(message) = run(std::env::args().skip(1)) {
        eprintln!("contactcard_cli: {message}");
        std::process::exit(2);
    }
}

fn run(args: impl Iterator<Item = String>) -> Result<(), String> {
    let options = Options::parse(args)?;

    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        init_logging(default_log_level(), &log_dir)?;
    }

    let contact = match options.contact_path.as_deref() {
        Some(path) => load_contact(path)?,
        None => sample_contact()?,
    };

    let card = compose_card(&contact);
    if options.json_tree {
        let tree = serde_json::to_string_pretty(&card)
            .map_err(|err| format!("failed to encode display tree: {err}"))?;
        println!("{tree}");
    } else {
        println!("{}", render_to_text(&card, &BlankFetcher));
    }
    Ok(())
}

struct Options {
    json_tree: bool,
    contact_path: Option<String>,
}

impl Options {
    fn parse(args: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut json_tree = false;
        let mut contact_path = None;

        for arg in args {
            match arg.as_str() {
                "--json" => json_tree = true,
                flag if flag.starts_with('-') => {
                    return Err(format!(
                        "unknown flag `{flag}`; usage: contactcard_cli [--json] [contact.json]"
                    ));
                }
                path => {
                    if contact_path.replace(path.to_string()).is_some() {
                        return Err("at most one contact file can be given".to_string());
                    }
                }
            }
        }

        Ok(Self {
            json_tree,
            contact_path,
        })
    }
}

fn load_contact(path: &str) -> Result<ContactRecord, String> {
    let raw = std::fs::read_to_string(path)
        .map_err(|err| format!("failed to read `{path}`: {err}"))?;
    serde_json::from_str(&raw).map_err(|err| format!("invalid contact in `{path}`: {err}"))
}

/// Built-in demo contact, injected here so the composer stays data-free.
fn sample_contact() -> Result<ContactRecord, String> {
    let mut contact = ContactRecord::new(
        "Евгений",
        "Лукашин",
        "г. Москва, 3-я улица строителей, дом 25, кв. 25",
    )
    .map_err(|err| err.to_string())?;
    contact.surname = Some("Андреевич".to_string());
    contact.is_favorite = true;
    contact.phone = Some("7 905 659 87 05".to_string());
    contact.email = Some("s.dsdkjaj@gmail.com".to_string());
    Ok(contact)
}
