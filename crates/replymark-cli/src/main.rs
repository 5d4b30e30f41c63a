use anyhow::{Context, Result};
use replymark_engine::{RenderOptions, render_markdown_with, segment};
use std::io::Read;
use std::{env, fs, io, process};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let mut escape = false;
    let mut json = false;
    let mut file: Option<String> = None;

    for arg in &args[1..] {
        match arg.as_str() {
            "--escape" => escape = true,
            "--json" => json = true,
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "-" => file = None,
            flag if flag.starts_with('-') => {
                eprintln!("unknown flag: {flag}");
                print_usage();
                process::exit(1);
            }
            path => {
                if file.is_some() {
                    eprintln!("only one input file may be given");
                    process::exit(1);
                }
                file = Some(path.to_string());
            }
        }
    }

    let text = match &file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let opts = RenderOptions {
        escape_html: escape,
    };

    if json {
        let blocks = segment(&text, &opts);
        println!("{}", serde_json::to_string_pretty(&blocks)?);
    } else {
        println!("{}", render_markdown_with(&text, &opts));
    }

    Ok(())
}

fn print_usage() {
    eprintln!("usage: replymark [--escape] [--json] [FILE]");
    eprintln!();
    eprintln!("Renders the assistant-reply markup dialect to HTML on stdout.");
    eprintln!("Reads FILE, or stdin when FILE is absent or '-'.");
    eprintln!();
    eprintln!("  --escape   HTML-escape input text before rendering");
    eprintln!("  --json     print the segmented block tree as JSON instead of HTML");
}
