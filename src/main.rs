// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, paths, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print_help();
        return Ok(());
    }

    let lang = args.opt_value_from_str("--lang").unwrap_or(None);
    let data_dir: Option<String> = args.opt_value_from_str("--data-dir").unwrap_or(None);
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or(None);

    paths::init_cli_overrides(data_dir.clone(), config_dir.clone());

    let flags = Flags {
        lang,
        gallery_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
        data_dir,
        config_dir,
    };

    app::run(flags)
}

fn print_help() {
    println!(
        "iced_gallery {}\n\n\
         USAGE:\n    iced_gallery [OPTIONS] <MANIFEST|DIRECTORY|IMAGE>\n\n\
         OPTIONS:\n    \
         -h, --help               Print this help\n    \
         --lang <ID>              Interface language (e.g. en-US, fr)\n    \
         --data-dir <DIR>         Directory for saved gallery state\n    \
         --config-dir <DIR>       Directory for settings.toml",
        env!("CARGO_PKG_VERSION")
    );
}
