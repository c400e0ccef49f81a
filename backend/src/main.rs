#[macro_use]
extern crate rocket;

use backend::config::{create_app_state, create_cors, init_logger, load_environment};
use backend::build_rocket;

#[launch]
fn rocket() -> _ {
    load_environment();
    init_logger();

    let state = match create_app_state() {
        Ok(state) => state,
        Err(e) => {
            log::error!("Failed to initialise catalog: {e:?}");
            std::process::exit(1);
        }
    };

    let server = build_rocket(state);
    match create_cors() {
        Ok(cors) => server.attach(cors),
        Err(e) => {
            log::error!("CORS disabled: {e:?}");
            server
        }
    }
}
