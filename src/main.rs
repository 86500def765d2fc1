use compliance_browser::app::App;

#[cfg(feature = "desktop")]
fn main() {
    dioxus::logger::init(tracing::Level::INFO).expect("should initialise logger");

    let webview_data_dir = compliance_browser::config::default_webview_data_dir()
        .expect("should resolve and create webview data directory");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new().with_title("Compliance Frameworks"),
                )
                .with_data_directory(webview_data_dir),
        )
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn main() {
    dioxus::logger::init(tracing::Level::INFO).expect("should initialise logger");
    dioxus::launch(App);
}
