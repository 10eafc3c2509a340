use crate::components::site_editor::SiteEditor;
use common::config::AdminConfig;
use yew::{html, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div>
                <SiteEditor config={AdminConfig::default()} />
            </div>
        }
    }
}
