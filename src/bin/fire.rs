//! Fire spreading outward from a single ignition point through random fuel

use macroquad::window::Conf;
use cellular_automata::{SimConfig, application, logging};

fn window_conf() -> Conf {
    logging::init();
    application::install_window_failure_hook();
    SimConfig::fire().window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    let code = application::run_to_exit_code(SimConfig::fire()).await;
    std::process::exit(code);
}
