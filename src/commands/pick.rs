//! `droplist pick`

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::model::{Choice, Item};
use crate::select_filter::SelectFilter;
use crate::sources::{self, CratesIoSource, SourceKind, StaticSource};
use crate::tui;
use crate::widget::Dropdown;

/// Build the dropdown the config asks for
pub fn build_dropdown(config: &Config, options: Option<&Path>) -> Result<Dropdown<Choice>> {
    let builder = Dropdown::builder().config(config);
    let builder = match config.source {
        SourceKind::Words => builder.loader(
            StaticSource::new(sources::words(), config.page_size)
                .with_latency(Duration::from_millis(config.latency_ms)),
        ),
        SourceKind::Crates => builder.loader(CratesIoSource::new(config.page_size)),
        SourceKind::File => {
            let path = options.context("--source file needs --options <FILE>")?;
            builder.select_filter(SelectFilter::from_choices(sources::load_options(path)?))
        }
    };
    Ok(builder.build()?)
}

/// Run the picker. Returns false when the user cancelled.
pub fn cmd_pick(config: &Config, options: Option<&Path>) -> Result<bool> {
    tracing::info!(target: "droplist::pick", source = ?config.source, "starting picker");
    let dropdown = build_dropdown(config, options)?;

    match tui::run(dropdown, config.theme.into())? {
        Some(choice) => {
            let label = choice.label();
            println!("{}", choice.value().unwrap_or(&label));
            Ok(true)
        }
        None => Ok(false),
    }
}
