//! CSR entry point. Builds without the `csr` feature produce an inert
//! binary so host-side `cargo test` stays browser-free.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        log::info!("Lead Generation System loaded");
        leptos::mount::mount_to_body(leadgen_ui::app::App);
    }
}
