use client::app::App;

fn main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // A logger was already installed; keep going without one.
    }
    leptos::mount::mount_to_body(App);
}
