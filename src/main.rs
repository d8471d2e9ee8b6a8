use yew::prelude::*;

use elec_watch_dashboard::components::{Dashboard, SettingsView};

#[derive(Clone, Copy, PartialEq, Eq)]
enum View {
    Dashboard,
    Settings,
}

#[function_component(App)]
fn app() -> Html {
    let view = use_state(|| View::Dashboard);

    let nav_button = |target: View, label: &str| {
        let view = view.clone();
        let class = if *view == target {
            "nav-button active"
        } else {
            "nav-button"
        };
        let onclick = Callback::from(move |_| view.set(target));
        html! { <button {class} {onclick}>{label}</button> }
    };

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Electricity Usage Monitor"}</h1>
                <nav>
                    { nav_button(View::Dashboard, "Dashboard") }
                    { nav_button(View::Settings, "Settings") }
                </nav>
            </header>

            <main class="app-main">
                {
                    match *view {
                        View::Dashboard => html! { <Dashboard /> },
                        View::Settings => html! { <SettingsView /> },
                    }
                }
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
