//! Resolve a translation key from the command line.
//!
//! Usage: `lookup <key> [locale] [token=value ...]`
//!
//! Configuration comes from the environment (see `Config::from_env`), with
//! `.env` files honored. Replacement arguments are `token=value` pairs; the
//! token is used verbatim, so placeholders like `:user` are passed as
//! `:user=Sam`.

use anyhow::{bail, Result};
use lingo::{Config, Translator};
use tracing::debug;

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lingo=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(key) = args.first() else {
        bail!("usage: lookup <key> [locale] [token=value ...]");
    };

    // Second positional argument is a locale unless it looks like a
    // replacement pair
    let mut rest = &args[1..];
    let mut locale: Option<&str> = None;
    if let Some(first) = rest.first() {
        if !first.contains('=') {
            locale = Some(first.as_str());
            rest = &rest[1..];
        }
    }

    let mut replacements = Vec::with_capacity(rest.len());
    for pair in rest {
        let Some((token, value)) = pair.split_once('=') else {
            bail!("replacement '{pair}' is not a token=value pair");
        };
        replacements.push((token, value));
    }

    let config = Config::from_env()?;
    debug!(?config, "resolved configuration");
    let translator = Translator::new(config);

    println!("{}", translator.translate(key, &replacements, locale));
    Ok(())
}
