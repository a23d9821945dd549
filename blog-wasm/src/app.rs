use crate::api::ApiClient;
use crate::models::*;
use crate::state::Feed;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

pub enum Msg {
    // Draft
    UpdatePostTitle(String),
    UpdatePostContent(String),

    // Posts
    LoadPosts,
    PostsLoaded(Vec<Post>),
    CreatePost,
    PostCreated(Vec<Post>),

    Error(String),
}

pub struct App {
    feed: Feed,
    api: ApiClient,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            feed: Feed::default(),
            api: ApiClient::new(),
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::LoadPosts);
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdatePostTitle(val) => {
                self.feed.draft.title = val;
                true
            }
            Msg::UpdatePostContent(val) => {
                self.feed.draft.content = val;
                true
            }

            Msg::LoadPosts => {
                self.feed.start_loading();

                let api = self.api.clone();
                let link = ctx.link().clone();

                spawn_local(async move {
                    match api.list_posts().await {
                        Ok(posts) => link.send_message(Msg::PostsLoaded(posts)),
                        Err(e) => link.send_message(Msg::Error(e)),
                    }
                });

                true
            }

            Msg::PostsLoaded(posts) => {
                log::debug!("Loaded {} posts", posts.len());
                self.feed.posts_loaded(posts);
                true
            }

            Msg::CreatePost => {
                let Some(req) = self.feed.submit() else {
                    log::debug!("Draft incomplete or create in flight, nothing sent");
                    return false;
                };

                let api = self.api.clone();
                let link = ctx.link().clone();

                spawn_local(async move {
                    match api.create_post(&req).await {
                        Ok(created) => link.send_message(Msg::PostCreated(created)),
                        Err(e) => link.send_message(Msg::Error(e)),
                    }
                });

                true
            }

            // Список перечитывается с сервера, без локальной вставки
            Msg::PostCreated(created) => {
                log::info!("Created {} post(s)", created.len());
                self.feed.post_created();
                ctx.link().send_message(Msg::LoadPosts);
                true
            }

            Msg::Error(e) => {
                log::error!("Request failed: {}", e);
                self.feed.failed(e);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                <h1>{ "Blog" }</h1>

                { self.view_error() }
                { self.view_create_post_form(ctx) }
                { self.view_loading() }
                { self.view_posts() }
            </div>
        }
    }
}

impl App {
    fn view_error(&self) -> Html {
        match &self.feed.error {
            Some(error) => html! {
                <div class="error">
                    { format!("Error: {}", error) }
                </div>
            },
            None => html! {},
        }
    }

    fn view_loading(&self) -> Html {
        if self.feed.loading {
            html! {
                <div class="loading"> { "Loading..." } </div>
            }
        } else {
            html! {}
        }
    }

    fn view_create_post_form(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::CreatePost
        });

        html! {
            <form class="create-post" {onsubmit}>
                <h3>{ "Create New Post" }</h3>
                <input
                    type="text"
                    placeholder="Title"
                    value={self.feed.draft.title.clone()}
                    oninput={ctx.link().callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::UpdatePostTitle(input.value())
                    })}
                />
                <textarea
                    placeholder="Content"
                    value={self.feed.draft.content.clone()}
                    oninput={ctx.link().callback(|e: InputEvent| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        Msg::UpdatePostContent(input.value())
                    })}
                />
                <button type="submit" disabled={self.feed.submitting}>
                    { if self.feed.submitting { "Publishing..." } else { "Create Post" } }
                </button>
            </form>
        }
    }

    fn view_posts(&self) -> Html {
        html! {
            <div class="posts-list">
                { for self.feed.posts.iter().map(view_post) }

                if self.feed.posts.is_empty() && !self.feed.loading {
                    <p>{ "No posts yet. Be the first to create one!" }</p>
                }
            </div>
        }
    }
}

fn view_post(post: &Post) -> Html {
    html! {
        <div class="post" key={post.id}>
            <h3>{ post.title.clone().unwrap_or_default() }</h3>
            <p>{ post.content.clone().unwrap_or_default() }</p>
            <small>{ format_timestamp(&post.created_at) }</small>
        </div>
    }
}

/// Formats an RFC 3339 timestamp in the browser's locale.
fn format_timestamp(raw: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(raw));
    if date.get_time().is_nan() {
        return raw.to_string();
    }

    date.to_locale_string("default", &JsValue::UNDEFINED).into()
}
