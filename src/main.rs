use env_logger::Env;
use runner_gen::app;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(err) = app::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
