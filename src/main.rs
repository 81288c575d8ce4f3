#![allow(non_snake_case)]

mod api;
mod components;
mod models;
mod pages;

use components::AppContext;
use dioxus::logger::tracing::{info, warn, Level};
use dioxus::prelude::*;
use models::SessionUser;
use pages::*;

fn main() {
    // 初始化日志
    dioxus_logger::init(Level::INFO).expect("日志初始化失败");
    info!("What-Desk 前端启动中...");

    launch(App);
}

#[component]
fn App() -> Element {
    let current_user = use_signal(|| None::<SessionUser>);
    let is_loading = use_signal(|| true);
    use_context_provider(|| AppContext {
        current_user,
        is_loading,
    });

    // 启动时若本地存有token，则向后端换取当前用户，恢复会话
    let mut current_user_signal = current_user;
    let mut is_loading_signal = is_loading;
    let mut init_attempted = use_signal(|| false);
    use_effect(move || {
        if *init_attempted.read() {
            return;
        }
        init_attempted.set(true);

        if api::get_token().is_some() {
            spawn(async move {
                match api::get_profile().await {
                    Ok(user_id) => {
                        current_user_signal.set(Some(SessionUser { user_id }));
                        is_loading_signal.set(false);
                    }
                    Err(_) => {
                        // token已失效，清掉重来
                        let _ = api::clear_token();
                        is_loading_signal.set(false);
                    }
                }
            });
        } else {
            is_loading_signal.set(false);
        }
    });

    rsx! {
        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/sign-up")]
        Register {},
}

#[component]
fn Layout() -> Element {
    let app_ctx = components::use_app_context();
    let mut current_user = app_ctx.current_user;
    let is_loading = app_ctx.is_loading;
    let nav = use_navigator();
    let user_state = current_user.read().clone();

    // 会话恢复完成前先显示加载界面
    if *is_loading.read() {
        return rsx! {
            div { class: "page-container",
                style { {include_str!("../assets/main.css")} }
                div {
                    style: "display: flex; justify-content: center; align-items: center; height: 100vh;",
                    h2 { "加载中..." }
                }
            }
        };
    }

    rsx! {
        div { class: "app-container",
            style { {include_str!("../assets/main.css")} }

            nav { class: "navbar",
                div { class: "nav-brand",
                    "What-Desk"
                }
                div { class: "nav-links",
                    Link { to: Route::Home {}, "首页" }

                    if let Some(user) = user_state.as_ref() {
                        span { class: "nav-user", "欢迎, {user.user_id}" }
                        button {
                            class: "btn-small btn-secondary",
                            onclick: move |_| {
                                if let Err(err) = api::clear_token() {
                                    warn!("清理Token失败: {}", err);
                                }
                                current_user.set(None);
                                nav.replace(Route::Login {});
                            },
                            "退出"
                        }
                    } else {
                        Link { to: Route::Login {}, "登录" }
                        Link { to: Route::Register {}, "注册" }
                    }
                }
            }

            main { class: "main-content",
                Outlet::<Route> {}
            }

            footer { class: "footer",
                "© 2025 What-Desk"
            }
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        div { class: "page-container",
            h1 { "欢迎使用 What-Desk" }
            p { "注册一个账号，或使用已有账号登录。" }

            div { class: "feature-grid",
                div { class: "feature-card",
                    h3 { "注册账号" }
                    p { "填写用户名、密码、昵称和邮箱，创建新账号" }
                    Link { to: Route::Register {},
                        button { class: "btn-primary", "去注册" }
                    }
                }

                div { class: "feature-card",
                    h3 { "登录" }
                    p { "已有账号，直接登录" }
                    Link { to: Route::Login {},
                        button { class: "btn-primary", "去登录" }
                    }
                }
            }
        }
    }
}
