use dioxus_desktop::Config;
use octofit_dashboard::ui_dioxus::App;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    dioxus_desktop::launch::launch(App, vec![], Config::default());
}
