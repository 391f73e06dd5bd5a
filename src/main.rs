#![allow(warnings)]
//! Marketplace Frontend Entry Point

mod app;
mod auth;
mod breadcrumb;
mod category_tree;
mod components;
mod config;
mod context;
mod logging;
mod markdown;
mod mock;
mod models;
mod oauth;
mod onboarding;
mod pages;
mod route;
mod services;
mod storage;
mod store;
mod wizard;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(config::app_config().log_level);
    log::info!("starting marketplace frontend");
    mount_to_body(App);
}
