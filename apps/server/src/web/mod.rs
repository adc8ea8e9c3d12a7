use commentcloud_core::WordCloudPipeline;
use rocket::{Build, Rocket, Route, config::Config as RocketCfg};
use tracing::{error, info};

pub mod api;
mod error;


pub fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub(crate) fn rocket_instance(
    pipeline: WordCloudPipeline,
    rocket_cfg: Option<RocketCfg>,
    enable_cors: bool,
) -> anyhow::Result<Rocket<Build>> {
    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r.manage(pipeline);
    for (m, r) in mounts() {
        instance = instance.mount(m, r);
    }
    if enable_cors {
        let cors = rocket_cors::CorsOptions::default().to_cors()?;
        instance = instance.attach(cors);
    }
    Ok(instance)
}

pub async fn run(
    pipeline: WordCloudPipeline,
    rocket_cfg: RocketCfg,
    enable_cors: bool,
) -> anyhow::Result<()> {
    info!(
        "Listening on http://{}:{}",
        rocket_cfg.address, rocket_cfg.port
    );
    let instance = rocket_instance(pipeline, Some(rocket_cfg), enable_cors)?;
    if let Err(err) = instance.launch().await {
        error!("Unable to run web server: {err}");
        anyhow::bail!("web server stopped: {err}");
    }
    Ok(())
}
