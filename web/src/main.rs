mod app;
mod components;
mod hooks;
mod pages;
mod utils;

fn main() {
    // `launch` installs the Dioxus logger.
    dioxus::launch(app::App);
}
