// SPDX-License-Identifier: MPL-2.0
use greeting_lens::app::{self, Flags};
use greeting_lens::i18n::ResourceTable;
use greeting_lens::logging;
use greeting_lens::ui::preview::{self, PREVIEWS};
use std::process::ExitCode;

const HELP: &str = "\
greeting_lens

USAGE:
  greeting_lens [OPTIONS]

OPTIONS:
  --lang <LOCALE>           Display language (e.g. pl, en-GB, en-rGB)
  --config-dir <DIR>        Directory holding settings.toml
  --preview <NAME|LOCALE>   Open a design-time preview (see --list-previews)
  --list-previews           Print the available previews and exit
  -v, --verbose             Enable debug logging (RUST_LOG overrides)
  -h, --help                Print this help and exit
";

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let verbose = args.contains(["-v", "--verbose"]);
    logging::init(verbose);

    if args.contains("--list-previews") {
        for preview in &PREVIEWS {
            println!("{}\t{}", preview.locale, preview.name);
        }
        return ExitCode::SUCCESS;
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(message) => {
            eprintln!("error: {message}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    let strings = match ResourceTable::load() {
        Ok(strings) => strings,
        Err(err) => {
            tracing::error!(%err, "translation bundles are broken");
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match app::run(flags, strings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "application loop failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, String> {
    let lang: Option<String> = args
        .opt_value_from_str("--lang")
        .map_err(|e| e.to_string())?;
    let config_dir: Option<String> = args
        .opt_value_from_str("--config-dir")
        .map_err(|e| e.to_string())?;
    let preview_query: Option<String> = args
        .opt_value_from_str("--preview")
        .map_err(|e| e.to_string())?;

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(format!("unexpected arguments: {remaining:?}"));
    }

    let preview = match preview_query {
        Some(query) => {
            Some(preview::find(&query).ok_or_else(|| format!("unknown preview: {query}"))?)
        }
        None => None,
    };

    Ok(Flags {
        lang,
        config_dir,
        preview,
    })
}
