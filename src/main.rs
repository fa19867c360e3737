mod app;
mod config;
mod content;
mod medialist;
mod runtime;
mod ui;
mod widget;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
