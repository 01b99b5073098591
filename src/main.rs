// SPDX-License-Identifier: MPL-2.0
use folio::app::{self, Flags};
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    let lang = args
        .opt_value_from_str("--lang")
        .unwrap_or_else(|error| {
            tracing::warn!(%error, "ignoring invalid --lang value");
            None
        });
    let config_dir = args
        .opt_value_from_str("--config-dir")
        .unwrap_or_else(|error| {
            tracing::warn!(%error, "ignoring invalid --config-dir value");
            None
        });

    let unused = args.finish();
    if !unused.is_empty() {
        tracing::warn!(?unused, "ignoring unrecognized arguments");
    }

    app::run(Flags { lang, config_dir })
}
