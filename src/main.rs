//! Todo List Frontend Entry Point

mod models;
mod error;
mod config;
mod logger;
mod todos;
mod storage;
mod controller;
mod store;
mod context;
mod components;
mod app;

use app::App;
use context::AppContext;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(config::LOG_LEVEL);
    mount_to_body(|| {
        let ctx = AppContext::initialize(config::STORAGE_KEY);
        view! { <App ctx=ctx /> }
    });
}
