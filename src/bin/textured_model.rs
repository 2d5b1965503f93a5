use env_logger::Env;
use turntable::{ProgramConfig, SceneKind};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = ProgramConfig::textured_model();
    if let SceneKind::TexturedModel { model_path } = &config.scene {
        log::info!("Model: {}", model_path.display());
    }

    if let Err(e) = turntable::run(config) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}
