use tracing::{info, Level};

fn main() {
    dioxus::logger::init(Level::INFO).expect("should initialize logger");
    info!("starting rentdesk");
    dioxus::launch(rentdesk::app::App);
}
