use std::io::Read;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::debug;

/// Percent-encode and decode URIs, and find URLs and e-mail addresses in text
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a whole URI, keeping its delimiters
    Encode {
        /// Text to encode, or `-` for stdin
        text: String,
    },
    /// Encode a URI component, escaping delimiters too
    EncodeComponent {
        /// Text to encode, or `-` for stdin
        text: String,
    },
    /// Decode a whole URI, keeping escaped delimiters
    Decode {
        /// Text to decode, or `-` for stdin
        text: String,
    },
    /// Decode a URI component, resolving every escape
    DecodeComponent {
        /// Text to decode, or `-` for stdin
        text: String,
    },
    /// Print the length of the URL at the start of the text, or -1
    UrlLength {
        /// Text to scan, or `-` for stdin
        text: String,
    },
    /// Print the length of the e-mail address at the start of the text, or -1
    EmailLength {
        /// Text to scan, or `-` for stdin
        text: String,
    },
    /// Print every URL and e-mail address in the text
    Links {
        /// Text to scan, or `-` for stdin
        text: String,
    },
}

/// Resolve `-` to the contents of stdin.
fn read_text(text: String) -> Result<String> {
    if text != "-" {
        return Ok(text);
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read stdin")?;
    Ok(buf)
}

fn print_length(length: Option<usize>) {
    match length {
        Some(len) => println!("{len}"),
        None => println!("-1"),
    }
}

fn main() -> Result<()> {
    let env = env_logger::Env::default()
        .filter_or("URICODE_LOG", "warn")
        .write_style_or("URICODE_LOG", "auto");
    env_logger::init_from_env(env);

    let args = Args::parse();
    match args.command {
        Command::Encode { text } => {
            println!("{}", uricode::encode(read_text(text)?)?);
        }
        Command::EncodeComponent { text } => {
            println!("{}", uricode::encode_component(read_text(text)?)?);
        }
        Command::Decode { text } => {
            let decoded = uricode::decode(read_text(text)?).context("failed to decode URI")?;
            println!("{decoded}");
        }
        Command::DecodeComponent { text } => {
            let decoded = uricode::decode_component(read_text(text)?)
                .context("failed to decode URI component")?;
            println!("{decoded}");
        }
        Command::UrlLength { text } => print_length(uricode::url_prefix_length(read_text(text)?)),
        Command::EmailLength { text } => {
            print_length(uricode::email_prefix_length(read_text(text)?))
        }
        Command::Links { text } => {
            let text = read_text(text)?;
            let mut count = 0;
            for span in uricode::links(&text) {
                let kind = match span.kind {
                    uricode::LinkKind::Url => "url",
                    uricode::LinkKind::Email => "email",
                };
                if let Some(found) = span.as_str(&text) {
                    println!("{}\t{}\t{}", span.start, kind, found);
                    count += 1;
                }
            }
            debug!("found {count} links in {} bytes", text.len());
        }
    }

    Ok(())
}
