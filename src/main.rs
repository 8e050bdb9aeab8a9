use std::error::Error;
use statplot_gallery::{
    filter_demo::{self, Camera},
    gallery,
    output::{OutputConfig, SaveAndShow},
};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let config = OutputConfig::from_env();
    log::debug!("{:?}", config);
    let presenter = SaveAndShow::new(config.clone());

    gallery::simple_plots(&presenter, &config)?;
    gallery::show_3d(&presenter)?;
    filter_demo::filter_demo(&Camera, &presenter)?;
    Ok(())
}
