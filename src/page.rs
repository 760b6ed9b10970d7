use maud::{DOCTYPE, Markup, html};

use crate::prompt::Action;
use crate::session::Session;
use crate::view::ResultView;

const MAIN_CLASSES: &str = "flex flex-col items-center justify-center min-h-screen p-6 transition-all";

/// Where the identity provider's sign-in and sign-out live.
#[derive(Debug, Clone)]
pub struct PageLinks {
    pub sign_in_url: String,
    pub sign_out_url: String,
}

pub fn render(view: &ResultView, links: &PageLinks) -> Markup {
    let theme = view.theme();
    let (icon, icon_class) = theme.toggle_icon();

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Content Idea Generator" }
            }
            body {
                main class={ (MAIN_CLASSES) " " (theme.classes()) } {
                    div class="mb-6 flex items-center space-x-4" {
                        img src="/genie.gif" alt="Genie Animation" class="w-40 h-40";
                        h1 class="text-4xl font-bold" { "Content Idea Generator" }
                    }

                    (session_block(view.session(), links))

                    div class="w-full max-w-lg p-6 bg-white shadow-lg rounded-xl transition-all" {
                        form method="post" action="/generate" {
                            input type="text" name="topic"
                                placeholder="Enter your niche or topic..."
                                value=(view.topic())
                                class="w-full p-3 border rounded-lg";
                            input type="hidden" name="theme" value=(theme.as_param());

                            div class="grid grid-cols-2 gap-4 mt-4" {
                                @for action in Action::ALL {
                                    button type="submit" name="action" value=(action.name())
                                        class="flex items-center justify-center" {
                                        (action.label())
                                    }
                                }
                            }
                        }

                        @if view.is_loading() {
                            p class="text-gray-600 mt-4" { "Generating..." }
                        }
                        @if !view.result().is_empty() {
                            div class="p-4 mt-4 bg-gray-50 border border-gray-200 rounded-lg" {
                                p class="text-lg result" { (view.result()) }
                            }
                        }
                        @if let Some(error) = view.error() {
                            div class="p-4 mt-4 bg-red-50 border border-red-200 rounded-lg" {
                                p class="text-lg error" { (error) }
                            }
                        }
                    }

                    form method="get" action="/" {
                        input type="hidden" name="topic" value=(view.topic());
                        @if !view.result().is_empty() {
                            input type="hidden" name="result" value=(view.result());
                        }
                        input type="hidden" name="theme" value=(theme.toggled().as_param());
                        button type="submit" class="fixed bottom-4 right-4 p-3 rounded-full transition-all theme-toggle" {
                            span class=(icon_class) { (icon) }
                        }
                    }
                }
            }
        }
    }
}

fn session_block(session: &Session, links: &PageLinks) -> Markup {
    match session.greeting() {
        None => html! {
            a href=(links.sign_in_url)
                class="mb-4 flex items-center px-6 py-2 bg-blue-500 hover:bg-blue-700 text-white rounded-lg sign-in" {
                "Sign in with Google"
            }
        },
        Some(greeting) => html! {
            p class="text-lg font-semibold mb-4 greeting" { (greeting) }
            a href=(links.sign_out_url)
                class="mb-4 px-6 py-2 bg-red-500 hover:bg-red-700 text-white rounded-lg sign-out" {
                "Sign Out"
            }
        },
    }
}
