use env_logger::Env;
use turntable::ProgramConfig;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(e) = turntable::run(ProgramConfig::dual_cube()) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}
