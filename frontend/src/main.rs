use crate::app::App;

mod app;
mod components;
mod segment_grid;
mod tops_sheet;
mod webhook;

fn main() {
    yew::Renderer::<App>::new().render();
}
