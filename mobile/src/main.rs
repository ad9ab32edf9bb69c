use dioxus::prelude::*;

use views::{
    Create, Explore, Home, LeagueDetail, Leagues, Onboarding, PlayerDetail, PostDetail, Profile,
    RoleProfile, Search, Settings, SignIn, SignUp, TabsLayout, TeamDetail, Training,
    TrainingDetail,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/sign-in")]
    SignIn {},
    #[route("/sign-up")]
    SignUp {},
    #[route("/onboarding")]
    Onboarding {},
    #[layout(TabsLayout)]
        #[route("/home")]
        Home {},
        #[route("/explore")]
        Explore {},
        #[route("/leagues")]
        Leagues {},
        #[route("/training")]
        Training {},
        #[route("/create")]
        Create {},
    #[end_layout]
    #[route("/post/:post_id")]
    PostDetail { post_id: String },
    #[route("/search")]
    Search {},
    #[route("/league/:league_id")]
    LeagueDetail { league_id: String },
    #[route("/team/:team_id")]
    TeamDetail { team_id: String },
    #[route("/player/:player_id")]
    PlayerDetail { player_id: String },
    #[route("/training/:training_id")]
    TrainingDetail { training_id: String },
    #[route("/settings")]
    Settings {},
    #[route("/profile")]
    Profile {},
    #[route("/profile/role")]
    RoleProfile {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::SessionProvider {
            ui::ToastProvider {
                Router::<Route> {}
            }
        }
    }
}

#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Home {});
    rsx! {}
}
