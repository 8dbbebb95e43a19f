use clap::Parser;
use overbake_core::{BakeConfig, CookThresholds};
use wasm_bindgen::prelude::*;

mod bake;
mod clock;

/// Id of an optional `<script type="application/json">` element holding a [`BakeConfig`].
const CONFIG_ELEMENT_ID: &str = "bake-config";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Cook band thresholds: `standard`, `quick` or `low,mid,high,max`
    #[arg(short, long)]
    thresholds: Option<CookThresholds>,
}

impl Args {
    /// Parses arguments out of a location hash like `#--thresholds=quick&-vv`.
    fn from_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }
}

fn embedded_config() -> Option<BakeConfig> {
    use gloo::utils::document;

    let json = document()
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()?;
    match BakeConfig::from_json(&json) {
        Ok(config) => Some(config),
        Err(err) => {
            log::error!("ignoring embedded bake config: {}", err);
            None
        }
    }
}

/// Hash arguments win over the embedded config, which wins over the defaults.
fn resolve_config(thresholds: Option<CookThresholds>, embedded: Option<BakeConfig>) -> BakeConfig {
    match thresholds {
        Some(thresholds) => BakeConfig::new(thresholds),
        None => embedded.unwrap_or_default(),
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::from_hash(&location_hash).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }

    let config = resolve_config(args.thresholds, embedded_config());
    log::debug!("config: {:?}", config);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<bake::BakeView>::with_root_and_props(root, bake::BakeProps { config })
        .render();
}
