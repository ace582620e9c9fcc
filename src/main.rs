mod actions;
mod app;
mod config;
mod dispatch;
mod editor;
mod panel;
mod render;
mod state;
mod tools;
mod types;
mod ui;

use app::App;
use color_eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let terminal = ratatui::init();
    let app_result = App::default().run(terminal).await;
    ratatui::restore();
    app_result
}
