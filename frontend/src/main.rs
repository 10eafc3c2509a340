use crate::app::App;

mod app;
mod components;
mod field_grid;
mod tops_sheet;

fn main() {
    yew::Renderer::<App>::new().render();
}
